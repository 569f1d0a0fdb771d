pub mod authorization;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use authorization::{Action, Decision, DenyReason, decide};
pub use error::{CoreError, Result};
pub use models::ai_suggestion::AiSuggestion;
pub use models::attribution::Attribution;
pub use models::camera_movement::CameraMovement;
pub use models::collaborator::{Collaborator, Permissions};
pub use models::collaborator_role::CollaboratorRole;
pub use models::genre::Genre;
pub use models::lighting::Lighting;
pub use models::original_file::OriginalFile;
pub use models::project::Project;
pub use models::project_status::ProjectStatus;
pub use models::research_kind::ResearchKind;
pub use models::research_note::ResearchNote;
pub use models::scene::{Scene, ScenePatch};
pub use models::scene_comment::SceneComment;
pub use models::script::Script;
pub use models::script_metadata::ScriptMetadata;
pub use models::shot_type::ShotType;
pub use models::storyboard::Storyboard;
pub use models::transcript::Transcript;
pub use models::transcript_status::TranscriptStatus;
pub use models::user::User;
pub use models::user_role::UserRole;

pub use error_location::ErrorLocation;
