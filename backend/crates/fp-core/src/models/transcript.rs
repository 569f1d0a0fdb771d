use crate::{CoreError, OriginalFile, Result as CoreErrorResult, TranscriptStatus};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_DURATION: &str = "00:00:00";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Text produced from an uploaded audio or video file.
///
/// Created in `Processing` before the transcription call is made, so an
/// interrupted call leaves an inspectable record rather than nothing.
/// `content` is only ever set on the way to `Completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub id: Uuid,
    pub project_id: Uuid,
    pub uploaded_by: Uuid,
    pub title: String,
    pub original_file: OriginalFile,
    pub content: Option<String>,
    /// HH:MM:SS
    pub duration: String,
    pub status: TranscriptStatus,
    pub confidence: Option<f64>,
    pub language: String,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transcript {
    pub fn processing(
        project_id: Uuid,
        uploaded_by: Uuid,
        title: String,
        original_file: OriginalFile,
        duration: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            uploaded_by,
            title,
            original_file,
            content: None,
            duration: duration.unwrap_or_else(|| DEFAULT_DURATION.to_string()),
            status: TranscriptStatus::Processing,
            confidence: None,
            language: DEFAULT_LANGUAGE.to_string(),
            tags: Vec::new(),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[track_caller]
    pub fn complete(&mut self, content: String) -> CoreErrorResult<()> {
        self.finish(TranscriptStatus::Completed)?;
        self.content = Some(content);
        Ok(())
    }

    #[track_caller]
    pub fn fail(&mut self) -> CoreErrorResult<()> {
        self.finish(TranscriptStatus::Failed)
    }

    #[track_caller]
    fn finish(&mut self, next: TranscriptStatus) -> CoreErrorResult<()> {
        if self.status.is_terminal() {
            return Err(CoreError::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Case-insensitive substring of title or content, or a case-insensitive
    /// exact match on any tag.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();

        self.title.to_lowercase().contains(&needle)
            || self
                .content
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
            || self.tags.iter().any(|t| t.to_lowercase() == needle)
    }
}
