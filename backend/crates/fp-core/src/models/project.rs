//! Project aggregate - the unit of sharing and authorization.

use crate::{
    Collaborator, CoreError, Genre, ProjectStatus, ResearchNote, Result as CoreErrorResult,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A film project owned by one user and shared with collaborators.
///
/// The owner is fixed at creation and never appears in `collaborators`.
/// `script_id`, `storyboard_id` and `transcript_ids` are back-references
/// filled in by the persistence layer from the attached entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub genre: Genre,
    pub status: ProjectStatus,
    pub owner_id: Uuid,
    pub collaborators: Vec<Collaborator>,
    pub script_id: Option<Uuid>,
    pub storyboard_id: Option<Uuid>,
    pub transcript_ids: Vec<Uuid>,
    pub research: Vec<ResearchNote>,
    /// Optimistic concurrency token, incremented on every saved change
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with default genre and status
    pub fn new(owner_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            genre: Genre::default(),
            status: ProjectStatus::default(),
            owner_id,
            collaborators: Vec::new(),
            script_id: None,
            storyboard_id: None,
            transcript_ids: Vec::new(),
            research: Vec::new(),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark a change: bumps `version` and `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }

    pub fn is_owner(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    pub fn collaborator(&self, user_id: Uuid) -> Option<&Collaborator> {
        self.collaborators.iter().find(|c| c.user_id == user_id)
    }

    /// Owner or collaborator, regardless of role or permissions.
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.is_owner(user_id) || self.collaborator(user_id).is_some()
    }

    /// Append a collaborator, keeping the owner out and user ids unique.
    #[track_caller]
    pub fn add_collaborator(&mut self, collaborator: Collaborator) -> CoreErrorResult<()> {
        if self.is_owner(collaborator.user_id) {
            return Err(CoreError::Validation {
                message: "Project owner cannot be added as a collaborator".to_string(),
                field: Some("user_id".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.collaborator(collaborator.user_id).is_some() {
            return Err(CoreError::DuplicateCollaborator {
                user_id: collaborator.user_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.collaborators.push(collaborator);
        Ok(())
    }

    #[track_caller]
    pub fn collaborator_mut(&mut self, user_id: Uuid) -> CoreErrorResult<&mut Collaborator> {
        self.collaborators
            .iter_mut()
            .find(|c| c.user_id == user_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Collaborator",
                id: user_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    pub fn remove_collaborator(&mut self, user_id: Uuid) -> CoreErrorResult<Collaborator> {
        let index = self
            .collaborators
            .iter()
            .position(|c| c.user_id == user_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Collaborator",
                id: user_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(self.collaborators.remove(index))
    }

    /// Move to `next`, refusing to go backwards through production stages.
    #[track_caller]
    pub fn set_status(&mut self, next: ProjectStatus) -> CoreErrorResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.status = next;
        Ok(())
    }

    pub fn add_research_note(&mut self, note: ResearchNote) {
        self.research.push(note);
    }

    #[track_caller]
    pub fn remove_research_note(&mut self, note_id: Uuid) -> CoreErrorResult<ResearchNote> {
        let index = self
            .research
            .iter()
            .position(|n| n.id == note_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Research note",
                id: note_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(self.research.remove(index))
    }
}
