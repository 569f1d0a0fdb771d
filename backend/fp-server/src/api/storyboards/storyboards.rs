//! Storyboard REST API handlers
//!
//! Scene routes address scenes by their string id within the storyboard.

use crate::{
    ApiResult, AppState, CreateStoryboardRequest, DeleteResponse, SceneCommentRequest,
    SceneIdeasResponse, StoryboardResponse, UpdateStoryboardRequest, UserId,
};

use fp_service::{SceneInput, SceneInputPatch};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/projects/{id}/storyboard
pub async fn create_storyboard(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(project_id): Path<String>,
    Json(req): Json<CreateStoryboardRequest>,
) -> ApiResult<(StatusCode, Json<StoryboardResponse>)> {
    let project_id = Uuid::parse_str(&project_id)?;
    let storyboard = state
        .storyboards
        .create(principal, project_id, &req.title)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StoryboardResponse {
            storyboard: storyboard.into(),
        }),
    ))
}

/// GET /api/v1/projects/{id}/storyboard
pub async fn get_project_storyboard(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(project_id): Path<String>,
) -> ApiResult<Json<StoryboardResponse>> {
    let project_id = Uuid::parse_str(&project_id)?;
    let storyboard = state
        .storyboards
        .get_for_project(principal, project_id)
        .await?;

    Ok(Json(StoryboardResponse {
        storyboard: storyboard.into(),
    }))
}

/// GET /api/v1/storyboards/{id}
pub async fn get_storyboard(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<StoryboardResponse>> {
    let storyboard_id = Uuid::parse_str(&id)?;
    let storyboard = state.storyboards.get(principal, storyboard_id).await?;

    Ok(Json(StoryboardResponse {
        storyboard: storyboard.into(),
    }))
}

/// PATCH /api/v1/storyboards/{id}
pub async fn update_storyboard(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
    Json(req): Json<UpdateStoryboardRequest>,
) -> ApiResult<Json<StoryboardResponse>> {
    let storyboard_id = Uuid::parse_str(&id)?;
    let storyboard = state
        .storyboards
        .update(principal, storyboard_id, req.title.as_deref())
        .await?;

    Ok(Json(StoryboardResponse {
        storyboard: storyboard.into(),
    }))
}

/// DELETE /api/v1/storyboards/{id}
pub async fn delete_storyboard(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let storyboard_id = Uuid::parse_str(&id)?;
    state.storyboards.delete(principal, storyboard_id).await?;

    Ok(Json(DeleteResponse { deleted_id: id }))
}

/// POST /api/v1/storyboards/{id}/scenes
pub async fn add_scene(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
    Json(req): Json<SceneInput>,
) -> ApiResult<(StatusCode, Json<StoryboardResponse>)> {
    let storyboard_id = Uuid::parse_str(&id)?;
    let storyboard = state
        .storyboards
        .add_scene(principal, storyboard_id, req)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StoryboardResponse {
            storyboard: storyboard.into(),
        }),
    ))
}

/// PATCH /api/v1/storyboards/{id}/scenes/{scene_id}
pub async fn update_scene(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path((id, scene_id)): Path<(String, String)>,
    Json(req): Json<SceneInputPatch>,
) -> ApiResult<Json<StoryboardResponse>> {
    let storyboard_id = Uuid::parse_str(&id)?;
    let storyboard = state
        .storyboards
        .update_scene(principal, storyboard_id, &scene_id, req)
        .await?;

    Ok(Json(StoryboardResponse {
        storyboard: storyboard.into(),
    }))
}

/// DELETE /api/v1/storyboards/{id}/scenes/{scene_id}
pub async fn remove_scene(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path((id, scene_id)): Path<(String, String)>,
) -> ApiResult<Json<StoryboardResponse>> {
    let storyboard_id = Uuid::parse_str(&id)?;
    let storyboard = state
        .storyboards
        .remove_scene(principal, storyboard_id, &scene_id)
        .await?;

    Ok(Json(StoryboardResponse {
        storyboard: storyboard.into(),
    }))
}

/// POST /api/v1/storyboards/{id}/scenes/{scene_id}/comments
pub async fn add_scene_comment(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path((id, scene_id)): Path<(String, String)>,
    Json(req): Json<SceneCommentRequest>,
) -> ApiResult<(StatusCode, Json<StoryboardResponse>)> {
    let storyboard_id = Uuid::parse_str(&id)?;
    let storyboard = state
        .storyboards
        .add_scene_comment(principal, storyboard_id, &scene_id, &req.comment)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StoryboardResponse {
            storyboard: storyboard.into(),
        }),
    ))
}

/// POST /api/v1/storyboards/{id}/scenes/{scene_id}/ideas
pub async fn generate_scene_ideas(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path((id, scene_id)): Path<(String, String)>,
) -> ApiResult<Json<SceneIdeasResponse>> {
    let storyboard_id = Uuid::parse_str(&id)?;
    let ideas = state
        .storyboards
        .generate_ideas(principal, storyboard_id, &scene_id)
        .await?;

    Ok(Json(SceneIdeasResponse { scene_id, ideas }))
}
