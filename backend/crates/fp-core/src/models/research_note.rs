use crate::ResearchKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchNote {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub kind: ResearchKind,
    pub created_at: DateTime<Utc>,
}

impl ResearchNote {
    pub fn new(title: String, content: String, kind: ResearchKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            kind,
            created_at: Utc::now(),
        }
    }
}
