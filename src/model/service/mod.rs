pub mod submission;

pub use submission::{StoredFile, Submission};
