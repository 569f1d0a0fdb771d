use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Words per screenplay page used for the page estimate
pub const WORDS_PER_PAGE: u32 = 200;

/// Literal transition marker counted as a scene break
pub const SCENE_MARKER: &str = "CUT TO:";

/// Counts derived from script content. Recomputed on every content change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMetadata {
    pub word_count: u32,
    pub page_count: u32,
    pub scene_count: u32,
    pub last_edited: DateTime<Utc>,
}

impl ScriptMetadata {
    pub fn from_content(content: &str, last_edited: DateTime<Utc>) -> Self {
        let word_count = Self::word_count(content);
        Self {
            word_count,
            page_count: Self::page_count(word_count),
            scene_count: Self::scene_count(content),
            last_edited,
        }
    }

    /// Whitespace-delimited tokens
    pub fn word_count(content: &str) -> u32 {
        content.split_whitespace().count() as u32
    }

    pub fn page_count(word_count: u32) -> u32 {
        word_count.div_ceil(WORDS_PER_PAGE)
    }

    pub fn scene_count(content: &str) -> u32 {
        content.matches(SCENE_MARKER).count() as u32
    }
}
