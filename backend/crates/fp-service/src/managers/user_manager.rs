use crate::password::{MIN_PASSWORD_LENGTH, hash_password, verify_password};
use crate::support::{parse_optional_enum, required};
use crate::{ProfilePatch, Registration, ServiceError, ServiceResult};

use fp_core::{User, UserRole};
use fp_db::{DbError, UserRepository};

use chrono::Utc;
use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "invalid-credentials";
const SELF_ONLY: &str = "self-only";

/// Identity store: registration, login and profile edits.
pub struct UserManager {
    users: UserRepository,
}

impl UserManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    pub async fn register(&self, input: Registration) -> ServiceResult<User> {
        let username = required(&input.username, "username")?;
        let email = Self::validate_email(&input.email)?;
        if input.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ServiceError::validation(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
            ));
        }
        let role = parse_optional_enum::<UserRole>(input.role.as_deref(), "role")?
            .unwrap_or_default();

        let password = input.password;
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| ServiceError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(|e| ServiceError::internal(format!("Password hashing failed: {e}")))?;

        let user = User::new(&username, &email, hash, role);
        self.users.create(&user).await.map_err(Self::map_unique)?;
        info!("User {} registered as {}", user.id, user.role);

        Ok(user)
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<User> {
        let email = User::normalize_email(email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            return Err(ServiceError::access_denied(INVALID_CREDENTIALS));
        };

        let hash = user.password_hash.clone();
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| ServiceError::internal(format!("Password check task failed: {e}")))?
            .map_err(|e| ServiceError::internal(format!("Stored password hash unreadable: {e}")))?;

        if !matches {
            return Err(ServiceError::access_denied(INVALID_CREDENTIALS));
        }
        Ok(user)
    }

    pub async fn get(&self, user_id: Uuid) -> ServiceResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))
    }

    /// A user may only edit their own profile.
    pub async fn update_profile(
        &self,
        principal: Uuid,
        user_id: Uuid,
        patch: ProfilePatch,
    ) -> ServiceResult<User> {
        if principal != user_id {
            return Err(ServiceError::access_denied(SELF_ONLY));
        }
        let mut user = self.get(user_id).await?;

        if let Some(username) = patch.username.as_deref() {
            user.username = required(username, "username")?;
        }
        if let Some(email) = patch.email.as_deref() {
            user.email = Self::validate_email(email)?;
        }
        if let Some(role) = parse_optional_enum::<UserRole>(patch.role.as_deref(), "role")? {
            user.role = role;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = avatar;
        }

        user.updated_at = Utc::now();
        self.users.update(&user).await.map_err(Self::map_unique)?;

        Ok(user)
    }

    fn validate_email(email: &str) -> ServiceResult<String> {
        let email = User::normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(ServiceError::validation("email", "A valid email is required"));
        }
        Ok(email)
    }

    fn map_unique(err: DbError) -> ServiceError {
        if err.is_unique_violation_on("users.email") {
            ServiceError::conflict("Email is already registered")
        } else if err.is_unique_violation_on("users.username") {
            ServiceError::conflict("Username is already taken")
        } else {
            ServiceError::from(err)
        }
    }
}
