use fp_core::{Attribution, Scene, Storyboard};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StoryboardDto {
    pub id: String,
    pub project_id: String,
    pub author_id: String,
    pub title: String,
    /// Sorted by `order`
    pub scenes: Vec<Scene>,
    pub collaborators: Vec<Attribution>,
    pub version: i32,
    pub last_edited: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Storyboard> for StoryboardDto {
    fn from(s: Storyboard) -> Self {
        Self {
            id: s.id.to_string(),
            project_id: s.project_id.to_string(),
            author_id: s.author_id.to_string(),
            title: s.title,
            scenes: s.scenes,
            collaborators: s.collaborators,
            version: s.version,
            last_edited: s.last_edited.timestamp(),
            created_at: s.created_at.timestamp(),
            updated_at: s.updated_at.timestamp(),
        }
    }
}
