//! Transcript REST API handlers

use crate::{
    ApiError, ApiResult, AppState, DeleteResponse, SearchTranscriptsQuery, TranscriptDto,
    TranscriptListResponse, TranscriptResponse, UserId,
};

use fp_service::{TranscriptPatch, TranscriptUpload};

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

const DEFAULT_FILENAME: &str = "upload";
const DEFAULT_MIMETYPE: &str = "application/octet-stream";

/// POST /api/v1/projects/{id}/transcripts
///
/// Multipart form: required `file`, optional `title`, `duration` (HH:MM:SS)
/// and `tags` (comma-separated, or repeated).
///
/// A provider failure answers 502, but the failed transcript is still stored
/// and shows up in the project listing.
pub async fn upload_transcript(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(project_id): Path<String>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<TranscriptResponse>)> {
    let project_id = Uuid::parse_str(&project_id)?;

    let mut upload = TranscriptUpload::default();
    let mut has_file = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                upload.original_name = field.file_name().unwrap_or(DEFAULT_FILENAME).to_string();
                upload.mimetype = field.content_type().unwrap_or(DEFAULT_MIMETYPE).to_string();
                upload.bytes = field.bytes().await?.to_vec();
                has_file = true;
            }
            "title" => upload.title = Some(field.text().await?),
            "duration" => upload.duration = Some(field.text().await?),
            "tags" => upload.tags.extend(
                field
                    .text()
                    .await?
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from),
            ),
            other => log::debug!("Ignoring unknown upload field '{}'", other),
        }
    }

    if !has_file {
        return Err(ApiError::validation("file", "A file field is required"));
    }

    let transcript = state
        .transcripts
        .transcribe(principal, project_id, upload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TranscriptResponse {
            transcript: transcript.into(),
        }),
    ))
}

/// GET /api/v1/projects/{id}/transcripts
pub async fn list_transcripts(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(project_id): Path<String>,
) -> ApiResult<Json<TranscriptListResponse>> {
    let project_id = Uuid::parse_str(&project_id)?;
    let transcripts = state
        .transcripts
        .list_for_project(principal, project_id)
        .await?;

    Ok(Json(TranscriptListResponse {
        transcripts: transcripts.into_iter().map(TranscriptDto::from).collect(),
    }))
}

/// GET /api/v1/projects/{id}/transcripts/search?q=...
pub async fn search_transcripts(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(project_id): Path<String>,
    Query(query): Query<SearchTranscriptsQuery>,
) -> ApiResult<Json<TranscriptListResponse>> {
    let project_id = Uuid::parse_str(&project_id)?;
    let transcripts = state
        .transcripts
        .search(principal, project_id, &query.q)
        .await?;

    Ok(Json(TranscriptListResponse {
        transcripts: transcripts.into_iter().map(TranscriptDto::from).collect(),
    }))
}

/// GET /api/v1/transcripts/{id}
pub async fn get_transcript(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<TranscriptResponse>> {
    let transcript_id = Uuid::parse_str(&id)?;
    let transcript = state.transcripts.get(principal, transcript_id).await?;

    Ok(Json(TranscriptResponse {
        transcript: transcript.into(),
    }))
}

/// PATCH /api/v1/transcripts/{id}
pub async fn update_transcript(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
    Json(req): Json<TranscriptPatch>,
) -> ApiResult<Json<TranscriptResponse>> {
    let transcript_id = Uuid::parse_str(&id)?;
    let transcript = state
        .transcripts
        .update(principal, transcript_id, req)
        .await?;

    Ok(Json(TranscriptResponse {
        transcript: transcript.into(),
    }))
}

/// DELETE /api/v1/transcripts/{id}
pub async fn delete_transcript(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let transcript_id = Uuid::parse_str(&id)?;
    state.transcripts.delete(principal, transcript_id).await?;

    Ok(Json(DeleteResponse { deleted_id: id }))
}
