//! Project repository.
//!
//! A project is stored across two tables: the `fp_projects` row and its
//! ordered access-control list in `fp_project_collaborators`. Updates are a
//! compare-and-swap on `fp_projects.version`; the collaborator rows are only
//! rewritten by the transaction that won the swap. `script_id`, `storyboard_id` and `transcript_ids`
//! are never written here; they are read back from the attached tables.

use crate::mapping::{from_json, parse_enum, parse_timestamp, parse_uuid, to_json, to_millis};
use crate::Result as DbErrorResult;

use fp_core::{
    Collaborator, CollaboratorRole, Genre, Permissions, Project, ProjectStatus,
};

use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

#[derive(FromRow)]
struct ProjectRow {
    id: String,
    title: String,
    description: Option<String>,
    genre: String,
    status: String,
    owner_id: String,
    research: String,
    version: i32,
    created_at: i64,
    updated_at: i64,
}

#[derive(FromRow)]
struct CollaboratorRow {
    user_id: String,
    role: String,
    can_edit: bool,
    can_delete: bool,
    added_at: i64,
}

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                INSERT INTO fp_projects (
                    id, title, description, genre, status, owner_id, research,
                    version, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.genre.as_str())
        .bind(project.status.as_str())
        .bind(project.owner_id.to_string())
        .bind(to_json(&project.research)?)
        .bind(project.version)
        .bind(to_millis(project.created_at))
        .bind(to_millis(project.updated_at))
        .execute(&mut *tx)
        .await?;

        Self::write_collaborators(&mut tx, project).await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, title, description, genre, status, owner_id, research,
                    version, created_at, updated_at
                FROM fp_projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    /// Projects owned by `user_id` or listing them as a collaborator,
    /// most recently updated first.
    pub async fn find_visible_to(&self, user_id: Uuid) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT p.id, p.title, p.description, p.genre, p.status, p.owner_id,
                    p.research, p.version, p.created_at, p.updated_at
                FROM fp_projects p
                WHERE p.owner_id = ?1
                   OR EXISTS (
                        SELECT 1 FROM fp_project_collaborators c
                        WHERE c.project_id = p.id AND c.user_id = ?1
                   )
                ORDER BY p.updated_at DESC, p.rowid DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        let mut projects = Vec::with_capacity(rows.len());
        for row in rows {
            projects.push(self.hydrate(row).await?);
        }
        Ok(projects)
    }

    /// Compare-and-swap write of the project row and its collaborator list.
    /// Nothing is written unless the stored version still equals
    /// `expected_version`.
    ///
    /// Returns `false` when another writer got there first.
    pub async fn update(&self, project: &Project, expected_version: i32) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                UPDATE fp_projects
                SET title = ?, description = ?, genre = ?, status = ?, research = ?,
                    version = ?, updated_at = ?
                WHERE id = ? AND version = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.genre.as_str())
        .bind(project.status.as_str())
        .bind(to_json(&project.research)?)
        .bind(project.version)
        .bind(to_millis(project.updated_at))
        .bind(project.id.to_string())
        .bind(expected_version)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() != 1 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM fp_project_collaborators WHERE project_id = ?")
            .bind(project.id.to_string())
            .execute(&mut *tx)
            .await?;
        Self::write_collaborators(&mut tx, project).await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Delete a project together with everything attached to it.
    ///
    /// Returns `false` if no such project existed.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();
        let mut tx = self.pool.begin().await?;

        for statement in [
            "DELETE FROM fp_transcripts WHERE project_id = ?",
            "DELETE FROM fp_storyboards WHERE project_id = ?",
            "DELETE FROM fp_scripts WHERE project_id = ?",
            "DELETE FROM fp_project_collaborators WHERE project_id = ?",
        ] {
            sqlx::query(statement)
                .bind(&id_str)
                .execute(&mut *tx)
                .await?;
        }

        let result = sqlx::query("DELETE FROM fp_projects WHERE id = ?")
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn write_collaborators(
        tx: &mut Transaction<'_, Sqlite>,
        project: &Project,
    ) -> DbErrorResult<()> {
        let project_id = project.id.to_string();

        for (position, collaborator) in project.collaborators.iter().enumerate() {
            sqlx::query(
                r#"
                    INSERT INTO fp_project_collaborators (
                        project_id, user_id, position, role, can_edit, can_delete, added_at
                    ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&project_id)
            .bind(collaborator.user_id.to_string())
            .bind(position as i64)
            .bind(collaborator.role.as_str())
            .bind(collaborator.permissions.can_edit)
            .bind(collaborator.permissions.can_delete)
            .bind(to_millis(collaborator.added_at))
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    async fn hydrate(&self, row: ProjectRow) -> DbErrorResult<Project> {
        let collaborators = sqlx::query_as::<_, CollaboratorRow>(
            r#"
                SELECT user_id, role, can_edit, can_delete, added_at
                FROM fp_project_collaborators
                WHERE project_id = ?
                ORDER BY position ASC
            "#,
        )
        .bind(&row.id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|c| -> DbErrorResult<Collaborator> {
            Ok(Collaborator {
                user_id: parse_uuid(&c.user_id, "fp_project_collaborators.user_id")?,
                role: parse_enum::<CollaboratorRole>(&c.role, "fp_project_collaborators.role")?,
                permissions: Permissions {
                    can_edit: c.can_edit,
                    can_delete: c.can_delete,
                },
                added_at: parse_timestamp(c.added_at, "fp_project_collaborators.added_at")?,
            })
        })
        .collect::<DbErrorResult<Vec<_>>>()?;

        let script_id: Option<(String,)> =
            sqlx::query_as("SELECT id FROM fp_scripts WHERE project_id = ?")
                .bind(&row.id)
                .fetch_optional(&self.pool)
                .await?;

        let storyboard_id: Option<(String,)> =
            sqlx::query_as("SELECT id FROM fp_storyboards WHERE project_id = ?")
                .bind(&row.id)
                .fetch_optional(&self.pool)
                .await?;

        let transcript_ids: Vec<(String,)> = sqlx::query_as(
            "SELECT id FROM fp_transcripts WHERE project_id = ? ORDER BY created_at ASC",
        )
        .bind(&row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Project {
            id: parse_uuid(&row.id, "fp_projects.id")?,
            title: row.title,
            description: row.description,
            genre: parse_enum::<Genre>(&row.genre, "fp_projects.genre")?,
            status: parse_enum::<ProjectStatus>(&row.status, "fp_projects.status")?,
            owner_id: parse_uuid(&row.owner_id, "fp_projects.owner_id")?,
            collaborators,
            script_id: script_id
                .map(|(id,)| parse_uuid(&id, "fp_scripts.id"))
                .transpose()?,
            storyboard_id: storyboard_id
                .map(|(id,)| parse_uuid(&id, "fp_storyboards.id"))
                .transpose()?,
            transcript_ids: transcript_ids
                .iter()
                .map(|(id,)| parse_uuid(id, "fp_transcripts.id"))
                .collect::<DbErrorResult<_>>()?,
            research: from_json(&row.research)?,
            version: row.version,
            created_at: parse_timestamp(row.created_at, "fp_projects.created_at")?,
            updated_at: parse_timestamp(row.updated_at, "fp_projects.updated_at")?,
        })
    }
}
