//! Project REST API handlers
//!
//! Projects, their collaborator list and their research notes.

use crate::{
    ApiResult, AppState, DeleteResponse, ProjectDto, ProjectListResponse, ProjectResponse,
    ResearchNoteResponse, UserId,
};

use fp_service::{CollaboratorPatch, NewCollaborator, NewProject, NewResearchNote, ProjectPatch};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Projects
// =============================================================================

/// GET /api/v1/projects
///
/// Projects the caller owns or collaborates on, most recently updated first
pub async fn list_projects(
    State(state): State<AppState>,
    UserId(principal): UserId,
) -> ApiResult<Json<ProjectListResponse>> {
    let projects = state.projects.get_visible(principal).await?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// POST /api/v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Json(req): Json<NewProject>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let project = state.projects.create(principal, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            project: project.into(),
        }),
    ))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let project = state.projects.get(principal, project_id).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// PATCH /api/v1/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
    Json(req): Json<ProjectPatch>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let project = state.projects.update(principal, project_id, req).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// DELETE /api/v1/projects/{id}
///
/// Owner only. Attached script, storyboard and transcripts go with it.
pub async fn delete_project(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    state.projects.delete(principal, project_id).await?;

    Ok(Json(DeleteResponse { deleted_id: id }))
}

// =============================================================================
// Collaborators
// =============================================================================

/// POST /api/v1/projects/{id}/collaborators
pub async fn add_collaborator(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
    Json(req): Json<NewCollaborator>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let project_id = Uuid::parse_str(&id)?;
    let project = state
        .projects
        .add_collaborator(principal, project_id, req)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            project: project.into(),
        }),
    ))
}

/// PATCH /api/v1/projects/{id}/collaborators/{user_id}
pub async fn update_collaborator(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path((id, user_id)): Path<(String, String)>,
    Json(req): Json<CollaboratorPatch>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let user_id = Uuid::parse_str(&user_id)?;
    let project = state
        .projects
        .update_collaborator_permissions(principal, project_id, user_id, req)
        .await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// DELETE /api/v1/projects/{id}/collaborators/{user_id}
pub async fn remove_collaborator(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path((id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let user_id = Uuid::parse_str(&user_id)?;
    let project = state
        .projects
        .remove_collaborator(principal, project_id, user_id)
        .await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

// =============================================================================
// Research notes
// =============================================================================

/// POST /api/v1/projects/{id}/research
pub async fn add_research_note(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
    Json(req): Json<NewResearchNote>,
) -> ApiResult<(StatusCode, Json<ResearchNoteResponse>)> {
    let project_id = Uuid::parse_str(&id)?;
    let note = state
        .projects
        .add_research_note(principal, project_id, req)
        .await?;

    Ok((StatusCode::CREATED, Json(ResearchNoteResponse { note })))
}

/// DELETE /api/v1/projects/{id}/research/{note_id}
pub async fn remove_research_note(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path((id, note_id)): Path<(String, String)>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let note_id = Uuid::parse_str(&note_id)?;
    let project = state
        .projects
        .remove_research_note(principal, project_id, note_id)
        .await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}
