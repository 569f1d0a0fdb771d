use crate::ApiError;

use fp_service::ServiceError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::from(ServiceError::not_found("Project", "abc"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Project abc not found");
}

#[tokio::test]
async fn test_access_denied_returns_403_with_reason() {
    let error = ApiError::from(ServiceError::access_denied("owner-only"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "ACCESS_DENIED");
    assert_eq!(json["error"]["message"], "owner-only");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::from(ServiceError::validation("title", "title is required"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::from(ServiceError::conflict("already a collaborator"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_upstream_returns_502() {
    let error = ApiError::from(ServiceError::upstream("provider timed out"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["error"]["code"], "UPSTREAM_FAILURE");
}

#[tokio::test]
async fn test_internal_hides_details() {
    let error = ApiError::from(ServiceError::internal("disk I/O error at page 7"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("disk"));
}

#[tokio::test]
async fn test_unauthorized_returns_401_without_field() {
    let error = ApiError::Unauthorized {
        message: "Missing X-User-Id header".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert!(json["error"].get("field").is_none());
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err = ApiError::from(uuid_err);

    assert!(matches!(api_err, ApiError::Validation { .. }));
}
