use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSuggestion {
    pub id: Uuid,
    pub suggestion: String,
    pub applied: bool,
    pub created_at: DateTime<Utc>,
}

impl AiSuggestion {
    pub fn new(suggestion: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            suggestion,
            applied: false,
            created_at: Utc::now(),
        }
    }
}
