//! Managers for the film production board.
//!
//! Every operation follows the same shape: load the target (and for
//! attached entities, its parent project), ask [`fp_core::decide`] for a
//! decision, validate input, then write. Nothing is written unless the
//! decision and validation both pass.

pub mod error;
pub mod inputs;
pub mod managers;
pub mod password;
mod support;

#[cfg(test)]
mod tests;

pub use error::{Result as ServiceResult, ServiceError};
pub use inputs::{
    CollaboratorPatch, NewCollaborator, NewProject, NewResearchNote, NewScript, ProfilePatch,
    ProjectPatch, Registration, SceneInput, SceneInputPatch, ScriptPatch, TranscriptPatch,
    TranscriptUpload,
};
pub use managers::project_manager::ProjectManager;
pub use managers::script_manager::ScriptManager;
pub use managers::storyboard_manager::StoryboardManager;
pub use managers::transcript_manager::TranscriptManager;
pub use managers::user_manager::UserManager;
