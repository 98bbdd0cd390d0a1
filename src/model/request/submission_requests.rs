use std::fmt;

/// the named file inputs of a delivery submission form. Each one holds at most one file.
///
/// Variants are declared in the order their files are reported back to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileSlot {
    Photo1,
    Photo2,
    Photo3,
    Signature,
}

impl FileSlot {
    pub const PHOTOS: [FileSlot; 3] = [FileSlot::Photo1, FileSlot::Photo2, FileSlot::Photo3];

    /// returns the slot for a multipart field name, or `None` if the field isn't a file slot
    pub fn from_field_name(name: &str) -> Option<FileSlot> {
        match name {
            "photo1" => Some(FileSlot::Photo1),
            "photo2" => Some(FileSlot::Photo2),
            "photo3" => Some(FileSlot::Photo3),
            "signature" => Some(FileSlot::Signature),
            _ => None,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            FileSlot::Photo1 => "photo1",
            FileSlot::Photo2 => "photo2",
            FileSlot::Photo3 => "photo3",
            FileSlot::Signature => "signature",
        }
    }
}

impl fmt::Display for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
