use crate::support::{authorize, load_project, required, with_timeout};
use crate::{ServiceError, ServiceResult, TranscriptPatch, TranscriptUpload};

use fp_ai::AiCollaborator;
use fp_core::{Action, OriginalFile, Transcript};
use fp_db::{ProjectRepository, TranscriptRepository};

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct TranscriptManager {
    projects: ProjectRepository,
    transcripts: TranscriptRepository,
    ai: Arc<dyn AiCollaborator>,
    ai_timeout: Duration,
    max_upload_bytes: u64,
}

impl TranscriptManager {
    pub fn new(
        pool: SqlitePool,
        ai: Arc<dyn AiCollaborator>,
        ai_timeout: Duration,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            projects: ProjectRepository::new(pool.clone()),
            transcripts: TranscriptRepository::new(pool),
            ai,
            ai_timeout,
            max_upload_bytes,
        }
    }

    /// Transcribe an uploaded audio or video file into a new transcript.
    ///
    /// The record is persisted as `processing` before the provider is called.
    /// If the call fails or times out the record is kept as `failed` with no
    /// content and the caller receives [`ServiceError::Upstream`].
    pub async fn transcribe(
        &self,
        principal: Uuid,
        project_id: Uuid,
        upload: TranscriptUpload,
    ) -> ServiceResult<Transcript> {
        let project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Edit)?;

        let original_name = required(&upload.original_name, "file")?;
        let original_file = OriginalFile {
            filename: format!("{}-{}", Utc::now().timestamp_millis(), original_name),
            original_name,
            mimetype: upload.mimetype.trim().to_lowercase(),
            size: upload.bytes.len() as u64,
        };
        self.validate_upload(&original_file)?;

        let title = match upload.title.as_deref() {
            Some(title) => required(title, "title")?,
            None => original_file.original_name.clone(),
        };

        let mut transcript = Transcript::processing(
            project.id,
            principal,
            title,
            original_file,
            upload.duration,
        );
        transcript.tags = upload.tags;
        self.transcripts.create(&transcript).await?;
        info!(
            "Transcript {} processing for project {}",
            transcript.id, project.id
        );

        let outcome = with_timeout(
            self.ai_timeout,
            self.ai.transcribe(
                upload.bytes,
                &transcript.original_file.filename,
                &transcript.original_file.mimetype,
            ),
        )
        .await;

        match outcome {
            Ok(text) => {
                transcript.complete(text)?;
                if !self.transcripts.finish(&transcript).await? {
                    warn!(
                        "Transcript {} was removed before transcription finished",
                        transcript.id
                    );
                    return Err(ServiceError::not_found("Transcript", transcript.id));
                }
                info!("Transcript {} completed", transcript.id);
                // Re-read so edits made while processing are returned
                self.find(transcript.id).await
            }
            Err(e) => {
                warn!("Transcription {} failed: {}", transcript.id, e);
                transcript.fail()?;
                if !self.transcripts.finish(&transcript).await? {
                    warn!(
                        "Transcript {} was removed before it could be marked failed",
                        transcript.id
                    );
                }
                Err(e)
            }
        }
    }

    pub async fn get(&self, principal: Uuid, transcript_id: Uuid) -> ServiceResult<Transcript> {
        self.load(principal, transcript_id, Action::Read).await
    }

    /// Newest first.
    pub async fn list_for_project(
        &self,
        principal: Uuid,
        project_id: Uuid,
    ) -> ServiceResult<Vec<Transcript>> {
        let project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Read)?;

        Ok(self.transcripts.find_by_project(project.id).await?)
    }

    pub async fn update(
        &self,
        principal: Uuid,
        transcript_id: Uuid,
        patch: TranscriptPatch,
    ) -> ServiceResult<Transcript> {
        let mut transcript = self.load(principal, transcript_id, Action::Edit).await?;

        if let Some(title) = patch.title.as_deref() {
            transcript.title = required(title, "title")?;
        }
        if let Some(notes) = patch.notes {
            transcript.notes = Some(notes);
        }
        if let Some(tags) = patch.tags {
            transcript.tags = tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
        }

        transcript.updated_at = Utc::now();
        if !self.transcripts.update_details(&transcript).await? {
            return Err(ServiceError::not_found("Transcript", transcript.id));
        }

        Ok(transcript)
    }

    pub async fn delete(&self, principal: Uuid, transcript_id: Uuid) -> ServiceResult<()> {
        let transcript = self.find(transcript_id).await?;
        let project = load_project(&self.projects, transcript.project_id).await?;
        authorize(
            principal,
            &project,
            Action::DeleteAttached {
                author_id: transcript.uploaded_by,
            },
        )?;

        self.transcripts.delete(transcript.id).await?;
        info!("Transcript {} deleted by {}", transcript.id, principal);

        Ok(())
    }

    /// Case-insensitive search over title, content and tags. Newest first.
    pub async fn search(
        &self,
        principal: Uuid,
        project_id: Uuid,
        query: &str,
    ) -> ServiceResult<Vec<Transcript>> {
        let query = required(query, "query")?;

        let project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Read)?;

        Ok(self.transcripts.search(project.id, &query).await?)
    }

    fn validate_upload(&self, file: &OriginalFile) -> ServiceResult<()> {
        if !file.is_media() {
            return Err(ServiceError::validation(
                "file",
                format!("Only audio and video files are allowed, got {}", file.mimetype),
            ));
        }
        if file.size == 0 {
            return Err(ServiceError::validation("file", "Uploaded file is empty"));
        }
        if file.size > self.max_upload_bytes {
            return Err(ServiceError::validation(
                "file",
                format!(
                    "File is {} bytes; the limit is {}",
                    file.size, self.max_upload_bytes
                ),
            ));
        }
        Ok(())
    }

    async fn find(&self, transcript_id: Uuid) -> ServiceResult<Transcript> {
        self.transcripts
            .find_by_id(transcript_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Transcript", transcript_id))
    }

    async fn load(
        &self,
        principal: Uuid,
        transcript_id: Uuid,
        action: Action,
    ) -> ServiceResult<Transcript> {
        let transcript = self.find(transcript_id).await?;
        let project = load_project(&self.projects, transcript.project_id).await?;
        authorize(principal, &project, action)?;
        Ok(transcript)
    }
}
