use crate::mapping::{
    from_json, parse_count, parse_timestamp, parse_uuid, to_json, to_millis,
};
use crate::Result as DbErrorResult;

use fp_core::{Script, ScriptMetadata};

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct ScriptRow {
    id: String,
    project_id: String,
    author_id: String,
    title: String,
    content: String,
    version: i64,
    collaborators: String,
    ai_suggestions: String,
    word_count: i64,
    page_count: i64,
    scene_count: i64,
    last_edited: i64,
    created_at: i64,
    updated_at: i64,
}

const SELECT_SCRIPT: &str = r#"
    SELECT id, project_id, author_id, title, content, version, collaborators,
        ai_suggestions, word_count, page_count, scene_count, last_edited,
        created_at, updated_at
    FROM fp_scripts
"#;

pub struct ScriptRepository {
    pool: SqlitePool,
}

impl ScriptRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a script. A second script for the same project is rejected by
    /// the `project_id` UNIQUE constraint.
    pub async fn create(&self, script: &Script) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO fp_scripts (
                    id, project_id, author_id, title, content, version, collaborators,
                    ai_suggestions, word_count, page_count, scene_count, last_edited,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(script.id.to_string())
        .bind(script.project_id.to_string())
        .bind(script.author_id.to_string())
        .bind(&script.title)
        .bind(&script.content)
        .bind(script.version)
        .bind(to_json(&script.collaborators)?)
        .bind(to_json(&script.ai_suggestions)?)
        .bind(script.metadata.word_count)
        .bind(script.metadata.page_count)
        .bind(script.metadata.scene_count)
        .bind(to_millis(script.metadata.last_edited))
        .bind(to_millis(script.created_at))
        .bind(to_millis(script.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Script>> {
        sqlx::query_as::<_, ScriptRow>(&format!("{SELECT_SCRIPT} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .map(Self::map_row)
            .transpose()
    }

    pub async fn find_by_project(&self, project_id: Uuid) -> DbErrorResult<Option<Script>> {
        sqlx::query_as::<_, ScriptRow>(&format!("{SELECT_SCRIPT} WHERE project_id = ?"))
            .bind(project_id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .map(Self::map_row)
            .transpose()
    }

    /// Compare-and-swap write. The row is only replaced if its stored version
    /// still equals `expected_version`.
    ///
    /// Returns `false` when another writer got there first.
    pub async fn update(&self, script: &Script, expected_version: i32) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE fp_scripts
                SET title = ?, content = ?, version = ?, collaborators = ?,
                    ai_suggestions = ?, word_count = ?, page_count = ?, scene_count = ?,
                    last_edited = ?, updated_at = ?
                WHERE id = ? AND version = ?
            "#,
        )
        .bind(&script.title)
        .bind(&script.content)
        .bind(script.version)
        .bind(to_json(&script.collaborators)?)
        .bind(to_json(&script.ai_suggestions)?)
        .bind(script.metadata.word_count)
        .bind(script.metadata.page_count)
        .bind(script.metadata.scene_count)
        .bind(to_millis(script.metadata.last_edited))
        .bind(to_millis(script.updated_at))
        .bind(script.id.to_string())
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM fp_scripts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn map_row(r: ScriptRow) -> DbErrorResult<Script> {
        Ok(Script {
            id: parse_uuid(&r.id, "fp_scripts.id")?,
            project_id: parse_uuid(&r.project_id, "fp_scripts.project_id")?,
            author_id: parse_uuid(&r.author_id, "fp_scripts.author_id")?,
            title: r.title,
            content: r.content,
            version: r.version as i32,
            collaborators: from_json(&r.collaborators)?,
            ai_suggestions: from_json(&r.ai_suggestions)?,
            metadata: ScriptMetadata {
                word_count: parse_count(r.word_count, "fp_scripts.word_count")?,
                page_count: parse_count(r.page_count, "fp_scripts.page_count")?,
                scene_count: parse_count(r.scene_count, "fp_scripts.scene_count")?,
                last_edited: parse_timestamp(r.last_edited, "fp_scripts.last_edited")?,
            },
            created_at: parse_timestamp(r.created_at, "fp_scripts.created_at")?,
            updated_at: parse_timestamp(r.updated_at, "fp_scripts.updated_at")?,
        })
    }
}
