use std::collections::BTreeMap;

use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::response::ErrorMessage;
use crate::model::service::{StoredFile, Submission};

static RECEIVED_MESSAGE: &str = "Delivery submission received successfully.";

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct StoredFileApi {
    #[serde(rename = "originalName")]
    pub original_name: String,
    #[serde(rename = "storedPath")]
    pub stored_path: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct SubmissionData {
    pub fields: BTreeMap<String, String>,
    pub photos: Vec<StoredFileApi>,
    /// serialized as `null` when no signature was accepted
    pub signature: Option<StoredFileApi>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct SubmissionResponse {
    pub message: String,
    pub data: SubmissionData,
}

#[derive(Responder)]
pub enum SubmitDeliveryResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<SubmissionResponse>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<ErrorMessage>),
}

// ----------------------------------

impl From<&StoredFile> for StoredFileApi {
    fn from(value: &StoredFile) -> Self {
        StoredFileApi {
            original_name: value.original_name.clone(),
            stored_path: value.stored_path.to_string_lossy().into_owned(),
        }
    }
}

impl From<Submission> for SubmissionResponse {
    fn from(value: Submission) -> Self {
        let photos = value
            .photos()
            .into_iter()
            .map(StoredFileApi::from)
            .collect();
        let signature = value.signature().map(StoredFileApi::from);
        SubmissionResponse {
            message: RECEIVED_MESSAGE.to_string(),
            data: SubmissionData {
                fields: value.fields,
                photos,
                signature,
            },
        }
    }
}
