use multer::Multipart;
use rocket::data::{ByteUnit, Data};
use rocket::http::ContentType;
use rocket::serde::json::Json;
use rocket::State;

use crate::config::UploadConfig;
use crate::model::error::submission_errors::SubmissionError;
use crate::model::response::submission_responses::{SubmissionResponse, SubmitDeliveryResponse};
use crate::model::response::ErrorMessage;
use crate::model::service::Submission;
use crate::service::submission_service::receive_submission;
use crate::upload::UploadStore;

/// accepts a delivery confirmation: up to 3 photos, a signature, and any text fields
#[post("/submitDelivery", data = "<data>")]
pub async fn submit_delivery(
    content_type: Option<&ContentType>,
    data: Data<'_>,
    store: &State<UploadStore>,
    upload_config: &State<UploadConfig>,
) -> SubmitDeliveryResponse {
    log::info!("Request received at /api/submitDelivery");
    let boundary = match content_type.and_then(|ct| multer::parse_boundary(ct.to_string()).ok()) {
        Some(boundary) => boundary,
        None => return failure(SubmissionError::MissingBoundary),
    };
    let stream = data.open(ByteUnit::from(upload_config.max_size_bytes));
    let multipart = Multipart::with_reader(stream, boundary);
    match receive_submission(multipart, store, upload_config.rejection_policy).await {
        Ok(submission) => {
            log_submission(&submission);
            SubmitDeliveryResponse::Success(Json::from(SubmissionResponse::from(submission)))
        }
        Err(e) => failure(e),
    }
}

fn failure(e: SubmissionError) -> SubmitDeliveryResponse {
    log::error!("Upload error: {e}");
    SubmitDeliveryResponse::Failure(ErrorMessage::server_error(e))
}

fn log_submission(submission: &Submission) {
    log::info!("Fields: {:?}", submission.fields.keys().collect::<Vec<_>>());
    let mut slots: Vec<_> = submission.files.keys().collect();
    slots.sort();
    let slots: Vec<&str> = slots.iter().map(|slot| slot.field_name()).collect();
    log::info!("File keys: {slots:?}");
    let photo_names: Vec<&str> = submission
        .photos()
        .iter()
        .map(|f| f.original_name.as_str())
        .collect();
    log::info!("Photos received: {photo_names:?}");
    if let Some(signature) = submission.signature() {
        log::info!("Signature received: {}", signature.original_name);
    }
}
