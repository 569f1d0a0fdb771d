//! Script REST API handlers

use crate::{
    AddSuggestionRequest, ApiResult, AppState, DeleteResponse, GenerateSuggestionsRequest,
    ScriptResponse, SuggestionListResponse, UserId,
};

use fp_service::{NewScript, ScriptPatch};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/projects/{id}/script
pub async fn create_script(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(project_id): Path<String>,
    Json(req): Json<NewScript>,
) -> ApiResult<(StatusCode, Json<ScriptResponse>)> {
    let project_id = Uuid::parse_str(&project_id)?;
    let script = state.scripts.create(principal, project_id, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ScriptResponse {
            script: script.into(),
        }),
    ))
}

/// GET /api/v1/projects/{id}/script
pub async fn get_project_script(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ScriptResponse>> {
    let project_id = Uuid::parse_str(&project_id)?;
    let script = state.scripts.get_for_project(principal, project_id).await?;

    Ok(Json(ScriptResponse {
        script: script.into(),
    }))
}

/// GET /api/v1/scripts/{id}
pub async fn get_script(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<ScriptResponse>> {
    let script_id = Uuid::parse_str(&id)?;
    let script = state.scripts.get(principal, script_id).await?;

    Ok(Json(ScriptResponse {
        script: script.into(),
    }))
}

/// PATCH /api/v1/scripts/{id}
///
/// Send `expected_version` to reject the write if someone saved in between.
pub async fn update_script(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
    Json(req): Json<ScriptPatch>,
) -> ApiResult<Json<ScriptResponse>> {
    let script_id = Uuid::parse_str(&id)?;
    let script = state.scripts.update(principal, script_id, req).await?;

    Ok(Json(ScriptResponse {
        script: script.into(),
    }))
}

/// DELETE /api/v1/scripts/{id}
pub async fn delete_script(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let script_id = Uuid::parse_str(&id)?;
    state.scripts.delete(principal, script_id).await?;

    Ok(Json(DeleteResponse { deleted_id: id }))
}

/// POST /api/v1/scripts/{id}/suggestions
pub async fn add_suggestion(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
    Json(req): Json<AddSuggestionRequest>,
) -> ApiResult<(StatusCode, Json<SuggestionListResponse>)> {
    let script_id = Uuid::parse_str(&id)?;
    let suggestion = state
        .scripts
        .add_suggestion(principal, script_id, &req.suggestion)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SuggestionListResponse {
            suggestions: vec![suggestion],
        }),
    ))
}

/// POST /api/v1/scripts/{id}/suggestions/generate
pub async fn generate_suggestions(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
    Json(req): Json<GenerateSuggestionsRequest>,
) -> ApiResult<Json<SuggestionListResponse>> {
    let script_id = Uuid::parse_str(&id)?;
    let suggestions = state
        .scripts
        .generate_suggestions(principal, script_id, req.context.as_deref())
        .await?;

    Ok(Json(SuggestionListResponse { suggestions }))
}

/// POST /api/v1/scripts/{id}/suggestions/{suggestion_id}/apply
pub async fn apply_suggestion(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path((id, suggestion_id)): Path<(String, String)>,
) -> ApiResult<Json<ScriptResponse>> {
    let script_id = Uuid::parse_str(&id)?;
    let suggestion_id = Uuid::parse_str(&suggestion_id)?;
    let script = state
        .scripts
        .apply_suggestion(principal, script_id, suggestion_id)
        .await?;

    Ok(Json(ScriptResponse {
        script: script.into(),
    }))
}
