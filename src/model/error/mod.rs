pub mod submission_errors;
