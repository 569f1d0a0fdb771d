use fp_core::{AiSuggestion, Attribution, Script};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ScriptDto {
    pub id: String,
    pub project_id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub version: i32,
    pub collaborators: Vec<Attribution>,
    pub ai_suggestions: Vec<AiSuggestion>,
    pub word_count: u32,
    pub page_count: u32,
    pub scene_count: u32,
    pub last_edited: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Script> for ScriptDto {
    fn from(s: Script) -> Self {
        Self {
            id: s.id.to_string(),
            project_id: s.project_id.to_string(),
            author_id: s.author_id.to_string(),
            title: s.title,
            content: s.content,
            version: s.version,
            collaborators: s.collaborators,
            ai_suggestions: s.ai_suggestions,
            word_count: s.metadata.word_count,
            page_count: s.metadata.page_count,
            scene_count: s.metadata.scene_count,
            last_edited: s.metadata.last_edited.timestamp(),
            created_at: s.created_at.timestamp(),
            updated_at: s.updated_at.timestamp(),
        }
    }
}
