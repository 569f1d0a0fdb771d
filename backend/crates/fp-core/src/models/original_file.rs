use serde::{Deserialize, Serialize};

/// Descriptor of the media file a transcript was produced from.
/// The bytes themselves are not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalFile {
    pub filename: String,
    pub original_name: String,
    pub mimetype: String,
    pub size: u64,
}

impl OriginalFile {
    pub fn is_media(&self) -> bool {
        self.mimetype.starts_with("audio/") || self.mimetype.starts_with("video/")
    }
}
