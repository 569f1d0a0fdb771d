use crate::{AppState, api, health};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};

use api::projects::projects as p;
use api::scripts::scripts as sc;
use api::storyboards::storyboards as sb;
use api::transcripts::transcripts as tr;

/// Multipart framing on top of the raw file bytes
const UPLOAD_OVERHEAD_BYTES: u64 = 64 * 1024;

/// Build the application router with all endpoints
///
/// `cors_origins` empty means any origin.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    let upload_limit =
        usize::try_from(state.max_upload_bytes + UPLOAD_OVERHEAD_BYTES).unwrap_or(usize::MAX);

    let api = Router::new()
        // Users
        .route(
            "/users/{id}",
            get(api::users::users::get_user).patch(api::users::users::update_profile),
        )
        // Projects
        .route("/projects", get(p::list_projects).post(p::create_project))
        .route(
            "/projects/{id}",
            get(p::get_project)
                .patch(p::update_project)
                .delete(p::delete_project),
        )
        .route("/projects/{id}/collaborators", post(p::add_collaborator))
        .route(
            "/projects/{id}/collaborators/{user_id}",
            patch(p::update_collaborator).delete(p::remove_collaborator),
        )
        .route("/projects/{id}/research", post(p::add_research_note))
        .route(
            "/projects/{id}/research/{note_id}",
            axum::routing::delete(p::remove_research_note),
        )
        // Scripts
        .route(
            "/projects/{id}/script",
            get(sc::get_project_script).post(sc::create_script),
        )
        .route(
            "/scripts/{id}",
            get(sc::get_script)
                .patch(sc::update_script)
                .delete(sc::delete_script),
        )
        .route("/scripts/{id}/suggestions", post(sc::add_suggestion))
        .route(
            "/scripts/{id}/suggestions/generate",
            post(sc::generate_suggestions),
        )
        .route(
            "/scripts/{id}/suggestions/{suggestion_id}/apply",
            post(sc::apply_suggestion),
        )
        // Storyboards
        .route(
            "/projects/{id}/storyboard",
            get(sb::get_project_storyboard).post(sb::create_storyboard),
        )
        .route(
            "/storyboards/{id}",
            get(sb::get_storyboard)
                .patch(sb::update_storyboard)
                .delete(sb::delete_storyboard),
        )
        .route("/storyboards/{id}/scenes", post(sb::add_scene))
        .route(
            "/storyboards/{id}/scenes/{scene_id}",
            patch(sb::update_scene).delete(sb::remove_scene),
        )
        .route(
            "/storyboards/{id}/scenes/{scene_id}/comments",
            post(sb::add_scene_comment),
        )
        .route(
            "/storyboards/{id}/scenes/{scene_id}/ideas",
            post(sb::generate_scene_ideas),
        )
        // Transcripts
        .route(
            "/projects/{id}/transcripts",
            get(tr::list_transcripts)
                .post(tr::upload_transcript)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/projects/{id}/transcripts/search",
            get(tr::search_transcripts),
        )
        .route(
            "/transcripts/{id}",
            get(tr::get_transcript)
                .patch(tr::update_transcript)
                .delete(tr::delete_transcript),
        );

    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Identity
        .route("/auth/register", post(api::auth::auth::register))
        .route("/auth/login", post(api::auth::auth::login))
        // REST API
        .nest("/api/v1", api)
        // Add shared state
        .with_state(state)
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-user-id")]);

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(allowed)
    }
}
