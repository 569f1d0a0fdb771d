use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credit line on a script or storyboard.
///
/// Purely cosmetic: never consulted when deciding whether a user may read or
/// change the entity. Access always comes from the parent project's
/// collaborator list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub user_id: Uuid,
    pub role: String,
}

impl Attribution {
    pub fn new(user_id: Uuid, role: &str) -> Self {
        Self {
            user_id,
            role: role.to_string(),
        }
    }
}
