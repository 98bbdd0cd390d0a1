use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::Request;

use crate::model::response::ErrorMessage;

static HEALTH_MESSAGE: &str = "API is running.";

#[get("/")]
pub fn health_check() -> &'static str {
    HEALTH_MESSAGE
}

/// answers CORS preflight requests for every path. The headers themselves are added by the
/// [`Cors`](crate::fairing::Cors) fairing
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

/// makes sure clients get a json body even for errors rocket generates itself
#[catch(default)]
pub fn json_catcher(status: Status, _req: &Request) -> (Status, Json<ErrorMessage>) {
    let reason = status.reason_lossy();
    let body = if status.code >= 500 {
        ErrorMessage::server_error(reason)
    } else {
        ErrorMessage::new(reason)
    };
    (status, body)
}
