use crate::{ApiError, UserId};

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(request: Request<Body>) -> Result<UserId, ApiError> {
    let (mut parts, _body) = request.into_parts();
    UserId::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let request = Request::builder()
        .header("X-User-Id", "12345678-1234-1234-1234-123456789abc")
        .body(Body::empty())
        .unwrap();

    let result = extract(request).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().0.to_string(),
        "12345678-1234-1234-1234-123456789abc"
    );
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let result = extract(request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_invalid_uuid() {
    let request = Request::builder()
        .header("X-User-Id", "not-a-valid-uuid")
        .body(Body::empty())
        .unwrap();

    let result = extract(request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
