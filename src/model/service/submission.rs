use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::model::request::FileSlot;

/// a file that made it through the filter and was written to the upload directory
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    /// the file name exactly as the client sent it
    pub original_name: String,
    pub stored_path: PathBuf,
}

/// everything accepted from one delivery submission
#[derive(Debug, Default, PartialEq)]
pub struct Submission {
    /// plain text fields. If a field name is repeated, the last value wins
    pub fields: BTreeMap<String, String>,
    pub files: HashMap<FileSlot, StoredFile>,
}

impl Submission {
    /// the accepted photos, always in `photo1`, `photo2`, `photo3` order. Empty slots are skipped
    pub fn photos(&self) -> Vec<&StoredFile> {
        FileSlot::PHOTOS
            .iter()
            .filter_map(|slot| self.files.get(slot))
            .collect()
    }

    pub fn signature(&self) -> Option<&StoredFile> {
        self.files.get(&FileSlot::Signature)
    }
}
