pub mod api_handler;
pub mod submission_handler;
