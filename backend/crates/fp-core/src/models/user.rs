use crate::UserRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Always stored lowercase
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub avatar: String,
    /// Ids of projects this user owns, derived from the projects table
    pub project_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: &str, email: &str, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: Self::normalize_username(username),
            email: Self::normalize_email(email),
            password_hash,
            role,
            avatar: String::new(),
            project_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn normalize_username(username: &str) -> String {
        username.trim().to_string()
    }

    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}
