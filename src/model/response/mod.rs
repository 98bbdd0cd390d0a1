use std::fmt::Display;

use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

pub mod submission_responses;

/// the json body sent back whenever a request fails
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ErrorMessage {
    pub error: String,
}

// ----------------------------------

impl ErrorMessage {
    pub fn new(error: impl Display) -> Json<ErrorMessage> {
        Json::from(ErrorMessage {
            error: error.to_string(),
        })
    }

    /// wraps the cause as `Server error: <cause>`
    pub fn server_error(cause: impl Display) -> Json<ErrorMessage> {
        Json::from(ErrorMessage {
            error: format!("Server error: {cause}"),
        })
    }
}
