pub mod submission_service;
