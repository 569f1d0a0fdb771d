use fp_core::{Collaborator, Project, ResearchNote};

use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub genre: String,
    pub status: String,
    pub owner_id: String,
    pub collaborators: Vec<Collaborator>,
    pub script_id: Option<String>,
    pub storyboard_id: Option<String>,
    pub transcript_ids: Vec<String>,
    pub research: Vec<ResearchNote>,
    pub version: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title,
            description: p.description,
            genre: p.genre.to_string(),
            status: p.status.to_string(),
            owner_id: p.owner_id.to_string(),
            collaborators: p.collaborators,
            script_id: p.script_id.map(|id| id.to_string()),
            storyboard_id: p.storyboard_id.map(|id| id.to_string()),
            transcript_ids: p.transcript_ids.iter().map(|id| id.to_string()).collect(),
            research: p.research,
            version: p.version,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
