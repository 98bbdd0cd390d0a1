use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use regex::Regex;
use rocket::tokio::fs::{self, File};

pub mod filter;


/// how many times we bump the timestamp looking for a free name before giving up
static MAX_NAME_ATTEMPTS: u32 = 16;

/// used in place of client file names that don't leave anything safe to write
static FALLBACK_FILE_NAME: &str = "upload";

static CONTROL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x00-\x1f\x7f]").unwrap());

/// the directory accepted uploads are written to.
///
/// Holding one of these means the directory existed when [`UploadStore::prepare`] ran
#[derive(Debug, Clone)]
pub struct UploadStore {
    directory: PathBuf,
}

impl UploadStore {
    /// ensures the upload directory exists, creating it (and any missing parents) if needed.
    /// Existing directories and their contents are left alone, so calling this repeatedly is fine
    pub fn prepare(directory: impl Into<PathBuf>) -> io::Result<UploadStore> {
        let directory = directory.into();
        std::fs::create_dir_all(&directory)?;
        Ok(UploadStore { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// creates a brand-new, empty file for the passed client file name and returns it with its path.
    ///
    /// The file is named `<epoch millis>-<name>`. If that name is already taken (two uploads of the
    /// same name in the same millisecond), the timestamp is moved forward a millisecond and we try
    /// again rather than overwriting anything
    pub async fn create(&self, original_name: &str) -> io::Result<(File, PathBuf)> {
        let timestamp = epoch_millis();
        let mut last_error = None;
        for offset in 0..MAX_NAME_ATTEMPTS {
            let path = self
                .directory
                .join(storage_name(timestamp + offset as u128, original_name));
            match File::options().write(true).create_new(true).open(&path).await {
                Ok(file) => return Ok((file, path)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    log::debug!("{path:?} already exists, trying the next timestamp");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_error.unwrap_or_else(|| io::Error::other("no storage name available")))
    }

    /// removes a stored file. Used to clean up after a submission fails part way through
    pub async fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }
}

/// builds the on-disk name for an upload: `<timestamp>-<name>`.
///
/// Only the last path component of the client's file name is used, so something like
/// `../../etc/passwd` can't escape the upload directory. Ordinary names pass through unchanged
pub fn storage_name(timestamp_millis: u128, original_name: &str) -> String {
    format!("{timestamp_millis}-{}", safe_file_name(original_name))
}

/// strips directories and control characters out of a client-supplied file name
pub fn safe_file_name(original_name: &str) -> Cow<'_, str> {
    // windows clients may send backslash-separated paths
    let last_component = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    let cleaned = CONTROL_CHARS.replace_all(last_component, "");
    if matches!(cleaned.as_ref(), "" | "." | "..") {
        Cow::Borrowed(FALLBACK_FILE_NAME)
    } else {
        cleaned
    }
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        // the clock being before 1970 isn't worth failing an upload over
        .unwrap_or(0)
}
