//! Caller-supplied input for manager operations.
//!
//! Enumerated fields arrive as strings and are parsed by the managers, so an
//! unknown value surfaces as a validation failure naming the field.

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
}

/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCollaborator {
    pub user_id: Uuid,
    /// Defaults to `viewer`
    pub role: Option<String>,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollaboratorPatch {
    pub role: Option<String>,
    pub can_edit: Option<bool>,
    pub can_delete: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewResearchNote {
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Defaults to `note`
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewScript {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    /// When present, the write only happens if the stored version still matches.
    pub expected_version: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneInput {
    /// Generated when absent
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub shot_type: Option<String>,
    pub camera_movement: Option<String>,
    pub lighting: Option<String>,
    pub notes: Option<String>,
    pub duration: Option<u32>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneInputPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub shot_type: Option<String>,
    pub camera_movement: Option<String>,
    pub lighting: Option<String>,
    pub notes: Option<String>,
    pub duration: Option<u32>,
    pub order: Option<i32>,
}

/// An uploaded media file. Built by the transport layer from a multipart body.
#[derive(Debug, Clone, Default)]
pub struct TranscriptUpload {
    /// Defaults to the original file name
    pub title: Option<String>,
    pub original_name: String,
    pub mimetype: String,
    pub bytes: Vec<u8>,
    /// HH:MM:SS
    pub duration: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptPatch {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}
