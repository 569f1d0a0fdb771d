use crate::mapping::{parse_enum, parse_timestamp, parse_uuid, to_millis};
use crate::Result as DbErrorResult;

use fp_core::{User, UserRole};

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    avatar: String,
    created_at: i64,
    updated_at: i64,
}

const SELECT_USER: &str = r#"
    SELECT id, username, email, password_hash, role, avatar, created_at, updated_at
    FROM users
"#;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account. Duplicate username or email surfaces as
    /// [`crate::DbError::UniqueViolation`].
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, username, email, password_hash, role, avatar, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.avatar)
        .bind(to_millis(user.created_at))
        .bind(to_millis(user.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        self.hydrate(row).await
    }

    /// Lookup by email. The caller is expected to pass a normalized address.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        self.hydrate(row).await
    }

    pub async fn exists(&self, id: Uuid) -> DbErrorResult<bool> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// Persist profile fields. Identity (`id`, `created_at`) is never rewritten.
    pub async fn update(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE users
                SET username = ?, email = ?, password_hash = ?, role = ?, avatar = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.avatar)
        .bind(to_millis(user.updated_at))
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn hydrate(&self, row: Option<UserRow>) -> DbErrorResult<Option<User>> {
        let Some(row) = row else {
            return Ok(None);
        };

        let project_ids: Vec<(String,)> = sqlx::query_as(
            "SELECT id FROM fp_projects WHERE owner_id = ? ORDER BY created_at ASC",
        )
        .bind(&row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(User {
            id: parse_uuid(&row.id, "users.id")?,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            role: parse_enum::<UserRole>(&row.role, "users.role")?,
            avatar: row.avatar,
            project_ids: project_ids
                .iter()
                .map(|(id,)| parse_uuid(id, "fp_projects.id"))
                .collect::<DbErrorResult<_>>()?,
            created_at: parse_timestamp(row.created_at, "users.created_at")?,
            updated_at: parse_timestamp(row.updated_at, "users.updated_at")?,
        }))
    }
}
