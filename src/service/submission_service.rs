use std::collections::HashSet;
use std::path::PathBuf;

use multer::{Field, Multipart};
use rocket::tokio::io::AsyncWriteExt;

use crate::model::error::submission_errors::SubmissionError;
use crate::model::request::FileSlot;
use crate::model::service::{StoredFile, Submission};
use crate::upload::filter::{accepts_media_type, RejectionPolicy, DEFAULT_MEDIA_TYPE};
use crate::upload::UploadStore;

/// reads every part of a delivery submission, storing the accepted files in `store`.
///
/// If anything fails, files already written for this submission are removed before the error is
/// returned, so a failed submission doesn't leave anything behind in the upload directory
pub async fn receive_submission(
    mut multipart: Multipart<'_>,
    store: &UploadStore,
    policy: RejectionPolicy,
) -> Result<Submission, SubmissionError> {
    let mut written: Vec<PathBuf> = Vec::new();
    let result = read_parts(&mut multipart, store, policy, &mut written).await;
    if result.is_err() {
        remove_written_files(store, &written).await;
    }
    result
}

async fn read_parts(
    multipart: &mut Multipart<'_>,
    store: &UploadStore,
    policy: RejectionPolicy,
    written: &mut Vec<PathBuf>,
) -> Result<Submission, SubmissionError> {
    let mut submission = Submission::default();
    // rejected files still use up their slot
    let mut filled_slots: HashSet<FileSlot> = HashSet::new();
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        let Some(original_name) = field.file_name().map(str::to_string) else {
            let value = field.text().await?;
            submission.fields.insert(field_name, value);
            continue;
        };
        // an optional file input left empty in the browser still sends a part, just with no name
        if original_name.is_empty() {
            log::debug!("Skipping empty file input {field_name}");
            continue;
        }
        let slot = match FileSlot::from_field_name(&field_name) {
            Some(slot) if filled_slots.insert(slot) => slot,
            _ => return Err(SubmissionError::UnexpectedField(field_name)),
        };
        // the raw header text, so a type that doesn't parse as a mime type is still prefix-checked
        let media_type = field
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string());
        if !accepts_media_type(&media_type) {
            log::warn!("Rejected file: {original_name} | MIME type: {media_type}");
            match policy {
                // multer skips whatever is left of the field on the next call to next_field
                RejectionPolicy::SilentDrop => continue,
                RejectionPolicy::HardFail => {
                    return Err(SubmissionError::RejectedMediaType {
                        original_name,
                        media_type,
                    })
                }
            }
        }
        let stored_path = write_field(field, &original_name, store, written).await?;
        log::debug!("Stored {slot} file {original_name} at {stored_path:?}");
        submission.files.insert(
            slot,
            StoredFile {
                original_name,
                stored_path,
            },
        );
    }
    Ok(submission)
}

/// streams the field's contents into a new file in the upload directory
async fn write_field(
    mut field: Field<'_>,
    original_name: &str,
    store: &UploadStore,
    written: &mut Vec<PathBuf>,
) -> Result<PathBuf, SubmissionError> {
    let (mut file, path) = store.create(original_name).await?;
    // recorded before writing so a half-written file gets cleaned up too
    written.push(path.clone());
    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    Ok(path)
}

async fn remove_written_files(store: &UploadStore, written: &[PathBuf]) {
    for path in written {
        if let Err(e) = store.remove(path).await {
            log::warn!("Failed to remove {path:?} after a failed submission. Error is {e}");
        }
    }
}
