use std::fmt;
use std::io;

/// everything that can go wrong while receiving a delivery submission.
/// All of these fail the one request; none of them take the server down
#[derive(Debug)]
pub enum SubmissionError {
    /// the request wasn't multipart, or its content type has no boundary
    MissingBoundary,
    /// the multipart body couldn't be read (bad boundary, truncated, over the size limit...)
    Multipart(multer::Error),
    /// a file was sent for a field that isn't a file slot, or a slot got a second file
    UnexpectedField(String),
    /// a file didn't have an image media type and the rejection policy is hard-fail
    RejectedMediaType {
        original_name: String,
        media_type: String,
    },
    /// couldn't create or write a file in the upload directory
    Storage(io::Error),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::MissingBoundary => write!(f, "Multipart: Boundary not found"),
            SubmissionError::Multipart(e) => write!(f, "{e}"),
            SubmissionError::UnexpectedField(name) => write!(f, "Unexpected field: {name}"),
            SubmissionError::RejectedMediaType {
                original_name,
                media_type,
            } => write!(f, "Rejected file {original_name} with MIME type {media_type}"),
            SubmissionError::Storage(e) => write!(f, "Failed to store file: {e}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

impl From<multer::Error> for SubmissionError {
    fn from(value: multer::Error) -> Self {
        SubmissionError::Multipart(value)
    }
}

impl From<io::Error> for SubmissionError {
    fn from(value: io::Error) -> Self {
        SubmissionError::Storage(value)
    }
}
