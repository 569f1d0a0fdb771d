#![allow(dead_code)]

//! Test infrastructure for fp-server API tests

pub use fp_ai::testing::{FakeAi, FakeMode, TRANSCRIPT_TEXT};

use fp_db::MIGRATOR;
use fp_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

pub const MAX_UPLOAD_BYTES: u64 = 1024;
pub const BOUNDARY: &str = "fp-test-boundary";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Router over a fresh database and a scripted AI collaborator
pub async fn create_test_app(mode: FakeMode) -> Router {
    let pool = create_test_pool().await;
    let state = AppState::new(
        pool,
        Arc::new(FakeAi::new(mode)),
        Duration::from_millis(200),
        MAX_UPLOAD_BYTES,
    );
    build_router(state, &[])
}

/// Send a request and decode the JSON response body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("X-User-Id", user.to_string());
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    into_json(app, request).await
}

pub async fn into_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Register a user over HTTP and return its id
pub async fn register(app: &Router, username: &str) -> Uuid {
    let (status, json) = send(
        app,
        "POST",
        "/auth/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "secret-password",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {json}");

    Uuid::parse_str(json["user"]["id"].as_str().unwrap()).unwrap()
}

/// Create a project over HTTP and return its id
pub async fn create_project(app: &Router, owner: Uuid, title: &str) -> Uuid {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/projects",
        Some(owner),
        Some(json!({ "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create project failed: {json}");

    Uuid::parse_str(json["project"]["id"].as_str().unwrap()).unwrap()
}

/// Build a multipart/form-data upload request with one file part
pub fn upload_request(
    uri: &str,
    user: Uuid,
    filename: &str,
    mimetype: &str,
    bytes: &[u8],
    tags: Option<&str>,
) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();

    if let Some(tags) = tags {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"tags\"\r\n\r\n{tags}\r\n"
            )
            .as_bytes(),
        );
    }

    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {mimetype}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header("X-User-Id", user.to_string())
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
