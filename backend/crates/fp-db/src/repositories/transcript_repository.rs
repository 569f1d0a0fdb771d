use crate::mapping::{from_json, parse_enum, parse_timestamp, parse_uuid, to_json, to_millis};
use crate::{DbError, Result as DbErrorResult};

use fp_core::{OriginalFile, Transcript, TranscriptStatus};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct TranscriptRow {
    id: String,
    project_id: String,
    uploaded_by: String,
    title: String,
    filename: String,
    original_name: String,
    mimetype: String,
    size: i64,
    content: Option<String>,
    duration: String,
    status: String,
    confidence: Option<f64>,
    language: String,
    tags: String,
    notes: Option<String>,
    created_at: i64,
    updated_at: i64,
}

const SELECT_TRANSCRIPT: &str = r#"
    SELECT id, project_id, uploaded_by, title, filename, original_name, mimetype, size,
        content, duration, status, confidence, language, tags, notes,
        created_at, updated_at
    FROM fp_transcripts
"#;

pub struct TranscriptRepository {
    pool: SqlitePool,
}

impl TranscriptRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, transcript: &Transcript) -> DbErrorResult<()> {
        let size = Self::size_column(transcript.original_file.size)?;

        sqlx::query(
            r#"
                INSERT INTO fp_transcripts (
                    id, project_id, uploaded_by, title, filename, original_name, mimetype,
                    size, content, duration, status, confidence, language, tags, notes,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(transcript.id.to_string())
        .bind(transcript.project_id.to_string())
        .bind(transcript.uploaded_by.to_string())
        .bind(&transcript.title)
        .bind(&transcript.original_file.filename)
        .bind(&transcript.original_file.original_name)
        .bind(&transcript.original_file.mimetype)
        .bind(size)
        .bind(&transcript.content)
        .bind(&transcript.duration)
        .bind(transcript.status.as_str())
        .bind(transcript.confidence)
        .bind(&transcript.language)
        .bind(to_json(&transcript.tags)?)
        .bind(&transcript.notes)
        .bind(to_millis(transcript.created_at))
        .bind(to_millis(transcript.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Transcript>> {
        sqlx::query_as::<_, TranscriptRow>(&format!("{SELECT_TRANSCRIPT} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .map(Self::map_row)
            .transpose()
    }

    /// All transcripts of a project, newest first.
    pub async fn find_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Transcript>> {
        sqlx::query_as::<_, TranscriptRow>(&format!(
            "{SELECT_TRANSCRIPT} WHERE project_id = ? ORDER BY created_at DESC, rowid DESC"
        ))
        .bind(project_id.to_string())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Self::map_row)
        .collect()
    }

    /// Transcripts of a project matching `query`, newest first.
    ///
    /// Matching is done by [`Transcript::matches_query`] so it follows the
    /// same Unicode case folding as the domain model rather than SQLite's
    /// ASCII-only `LOWER`.
    pub async fn search(&self, project_id: Uuid, query: &str) -> DbErrorResult<Vec<Transcript>> {
        Ok(self
            .find_by_project(project_id)
            .await?
            .into_iter()
            .filter(|t| t.matches_query(query))
            .collect())
    }

    /// Record the provider outcome of a `processing` transcript: status,
    /// content and confidence. User-editable fields are left alone.
    ///
    /// Returns `false` if the row is gone or already finished.
    pub async fn finish(&self, transcript: &Transcript) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE fp_transcripts
                SET status = ?, content = ?, confidence = ?, updated_at = ?
                WHERE id = ? AND status = 'processing'
            "#,
        )
        .bind(transcript.status.as_str())
        .bind(&transcript.content)
        .bind(transcript.confidence)
        .bind(to_millis(transcript.updated_at))
        .bind(transcript.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Write the user-editable title, tags and notes.
    ///
    /// Returns `false` if the row no longer exists.
    pub async fn update_details(&self, transcript: &Transcript) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE fp_transcripts
                SET title = ?, tags = ?, notes = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&transcript.title)
        .bind(to_json(&transcript.tags)?)
        .bind(&transcript.notes)
        .bind(to_millis(transcript.updated_at))
        .bind(transcript.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM fp_transcripts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[track_caller]
    fn size_column(size: u64) -> DbErrorResult<i64> {
        i64::try_from(size).map_err(|_| DbError::Corrupt {
            message: format!("File size out of range: {size}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn map_row(r: TranscriptRow) -> DbErrorResult<Transcript> {
        Ok(Transcript {
            id: parse_uuid(&r.id, "fp_transcripts.id")?,
            project_id: parse_uuid(&r.project_id, "fp_transcripts.project_id")?,
            uploaded_by: parse_uuid(&r.uploaded_by, "fp_transcripts.uploaded_by")?,
            title: r.title,
            original_file: OriginalFile {
                filename: r.filename,
                original_name: r.original_name,
                mimetype: r.mimetype,
                size: r.size.max(0) as u64,
            },
            content: r.content,
            duration: r.duration,
            status: parse_enum::<TranscriptStatus>(&r.status, "fp_transcripts.status")?,
            confidence: r.confidence,
            language: r.language,
            tags: from_json(&r.tags)?,
            notes: r.notes,
            created_at: parse_timestamp(r.created_at, "fp_transcripts.created_at")?,
            updated_at: parse_timestamp(r.updated_at, "fp_transcripts.updated_at")?,
        })
    }
}
