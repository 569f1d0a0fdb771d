use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only remark left on a storyboard scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneComment {
    pub user_id: Uuid,
    pub comment: String,
    pub timestamp: DateTime<Utc>,
}
