use crate::mapping::{from_json, parse_timestamp, parse_uuid, to_json, to_millis};
use crate::Result as DbErrorResult;

use fp_core::Storyboard;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct StoryboardRow {
    id: String,
    project_id: String,
    author_id: String,
    title: String,
    scenes: String,
    collaborators: String,
    version: i64,
    last_edited: i64,
    created_at: i64,
    updated_at: i64,
}

const SELECT_STORYBOARD: &str = r#"
    SELECT id, project_id, author_id, title, scenes, collaborators, version,
        last_edited, created_at, updated_at
    FROM fp_storyboards
"#;

pub struct StoryboardRepository {
    pool: SqlitePool,
}

impl StoryboardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, storyboard: &Storyboard) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO fp_storyboards (
                    id, project_id, author_id, title, scenes, collaborators, version,
                    last_edited, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(storyboard.id.to_string())
        .bind(storyboard.project_id.to_string())
        .bind(storyboard.author_id.to_string())
        .bind(&storyboard.title)
        .bind(to_json(&storyboard.scenes)?)
        .bind(to_json(&storyboard.collaborators)?)
        .bind(storyboard.version)
        .bind(to_millis(storyboard.last_edited))
        .bind(to_millis(storyboard.created_at))
        .bind(to_millis(storyboard.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Storyboard>> {
        sqlx::query_as::<_, StoryboardRow>(&format!("{SELECT_STORYBOARD} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .map(Self::map_row)
            .transpose()
    }

    pub async fn find_by_project(&self, project_id: Uuid) -> DbErrorResult<Option<Storyboard>> {
        sqlx::query_as::<_, StoryboardRow>(&format!("{SELECT_STORYBOARD} WHERE project_id = ?"))
            .bind(project_id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .map(Self::map_row)
            .transpose()
    }

    /// Compare-and-swap write on `version`, as for scripts. Scene edits and
    /// comment appends both go through here, so two concurrent comment posts
    /// cannot silently drop one another.
    pub async fn update(
        &self,
        storyboard: &Storyboard,
        expected_version: i32,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE fp_storyboards
                SET title = ?, scenes = ?, collaborators = ?, version = ?,
                    last_edited = ?, updated_at = ?
                WHERE id = ? AND version = ?
            "#,
        )
        .bind(&storyboard.title)
        .bind(to_json(&storyboard.scenes)?)
        .bind(to_json(&storyboard.collaborators)?)
        .bind(storyboard.version)
        .bind(to_millis(storyboard.last_edited))
        .bind(to_millis(storyboard.updated_at))
        .bind(storyboard.id.to_string())
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM fp_storyboards WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn map_row(r: StoryboardRow) -> DbErrorResult<Storyboard> {
        Ok(Storyboard {
            id: parse_uuid(&r.id, "fp_storyboards.id")?,
            project_id: parse_uuid(&r.project_id, "fp_storyboards.project_id")?,
            author_id: parse_uuid(&r.author_id, "fp_storyboards.author_id")?,
            title: r.title,
            scenes: from_json(&r.scenes)?,
            collaborators: from_json(&r.collaborators)?,
            version: r.version as i32,
            last_edited: parse_timestamp(r.last_edited, "fp_storyboards.last_edited")?,
            created_at: parse_timestamp(r.created_at, "fp_storyboards.created_at")?,
            updated_at: parse_timestamp(r.updated_at, "fp_storyboards.updated_at")?,
        })
    }
}
