use crate::{AiSuggestion, Attribution, CoreError, Result as CoreErrorResult, ScriptMetadata};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Screenplay attached to exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub id: Uuid,
    pub project_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    /// Starts at 1, bumped on every update. Doubles as the optimistic lock token.
    pub version: i32,
    pub collaborators: Vec<Attribution>,
    pub ai_suggestions: Vec<AiSuggestion>,
    pub metadata: ScriptMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Script {
    pub fn new(project_id: Uuid, author_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            author_id,
            title,
            metadata: ScriptMetadata::from_content(&content, now),
            content,
            version: 1,
            collaborators: vec![Attribution::new(author_id, "author")],
            ai_suggestions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace content and recompute the derived counts.
    pub fn set_content(&mut self, content: String) {
        self.metadata = ScriptMetadata::from_content(&content, Utc::now());
        self.content = content;
    }

    /// Record an edit: refresh `last_edited` and bump the version.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.metadata.last_edited = now;
        self.updated_at = now;
        self.version += 1;
    }

    /// Record a write that leaves content alone, e.g. a new suggestion.
    pub fn bump(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }

    /// Credit `user_id` if not already credited.
    pub fn credit(&mut self, user_id: Uuid, role: &str) {
        if !self.collaborators.iter().any(|a| a.user_id == user_id) {
            self.collaborators.push(Attribution::new(user_id, role));
        }
    }

    pub fn add_suggestion(&mut self, suggestion: String) -> &AiSuggestion {
        self.ai_suggestions.push(AiSuggestion::new(suggestion));
        &self.ai_suggestions[self.ai_suggestions.len() - 1]
    }

    /// Mark a suggestion applied. Applying twice is a no-op.
    #[track_caller]
    pub fn apply_suggestion(&mut self, suggestion_id: Uuid) -> CoreErrorResult<()> {
        let suggestion = self
            .ai_suggestions
            .iter_mut()
            .find(|s| s.id == suggestion_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Suggestion",
                id: suggestion_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        suggestion.applied = true;
        Ok(())
    }
}
