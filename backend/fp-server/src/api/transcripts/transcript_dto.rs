use fp_core::{OriginalFile, Transcript};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TranscriptDto {
    pub id: String,
    pub project_id: String,
    pub uploaded_by: String,
    pub title: String,
    pub original_file: OriginalFile,
    /// Absent unless `status` is `completed`
    pub content: Option<String>,
    pub duration: String,
    pub status: String,
    pub confidence: Option<f64>,
    pub language: String,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Transcript> for TranscriptDto {
    fn from(t: Transcript) -> Self {
        Self {
            id: t.id.to_string(),
            project_id: t.project_id.to_string(),
            uploaded_by: t.uploaded_by.to_string(),
            title: t.title,
            original_file: t.original_file,
            content: t.content,
            duration: t.duration,
            status: t.status.to_string(),
            confidence: t.confidence,
            language: t.language,
            tags: t.tags,
            notes: t.notes,
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
        }
    }
}
