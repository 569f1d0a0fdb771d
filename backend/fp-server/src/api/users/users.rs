use crate::{ApiResult, AppState, UserId, UserResponse};

use fp_service::ProfilePatch;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    UserId(_principal): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    let user = state.users.get(user_id).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PATCH /api/v1/users/{id}
pub async fn update_profile(
    State(state): State<AppState>,
    UserId(principal): UserId,
    Path(id): Path<String>,
    Json(req): Json<ProfilePatch>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    let user = state.users.update_profile(principal, user_id, req).await?;

    Ok(Json(UserResponse { user: user.into() }))
}
