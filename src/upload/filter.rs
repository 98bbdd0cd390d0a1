use serde::Deserialize;

/// media type reported for file parts that don't declare a parseable `Content-Type`
pub static DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

static ACCEPTED_PREFIX: &str = "image/";

/// what to do with an uploaded file whose media type is not accepted
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionPolicy {
    /// leave the file out of the submission, the request still succeeds
    SilentDrop,
    /// fail the whole submission
    HardFail,
}

/// returns true if the client-declared media type is an image type.
///
/// This only looks at what the client _says_ the file is, the contents are never inspected
pub fn accepts_media_type(media_type: &str) -> bool {
    media_type.starts_with(ACCEPTED_PREFIX)
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    #[test]
    fn accepts_image_types() {
        for media_type in ["image/jpeg", "image/png", "image/svg+xml", "image/", "image/png; q=1"] {
            assert!(accepts_media_type(media_type), "{media_type} should be accepted");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for media_type in [
            "text/plain",
            "application/octet-stream",
            "video/mp4",
            "",
            "image",
            " image/png",
            "IMAGE/PNG",
            "application/image/png",
        ] {
            assert!(!accepts_media_type(media_type), "{media_type} should be rejected");
        }
    }
}
