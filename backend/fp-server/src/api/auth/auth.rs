//! Registration and login. These are the only routes that do not need a principal.

use crate::{ApiResult, AppState, LoginRequest, UserResponse};

use fp_service::Registration;

use axum::{Json, extract::State, http::StatusCode};

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<Registration>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.users.register(req).await?;

    Ok((StatusCode::CREATED, Json(UserResponse { user: user.into() })))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users.authenticate(&req.email, &req.password).await?;

    Ok(Json(UserResponse { user: user.into() }))
}
