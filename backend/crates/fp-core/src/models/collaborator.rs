use crate::CollaboratorRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Two independent grants. `can_delete` does not imply `can_edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Permissions {
    pub can_edit: bool,
    pub can_delete: bool,
}

/// Access-control entry embedded in a [`crate::Project`].
///
/// This is the only list the authorization engine reads. Compare with
/// [`crate::Attribution`], which is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub user_id: Uuid,
    pub role: CollaboratorRole,
    pub permissions: Permissions,
    pub added_at: DateTime<Utc>,
}

impl Collaborator {
    pub fn new(user_id: Uuid, role: CollaboratorRole, permissions: Permissions) -> Self {
        Self {
            user_id,
            role,
            permissions,
            added_at: Utc::now(),
        }
    }
}
