pub mod submission_requests;

pub use submission_requests::FileSlot;
