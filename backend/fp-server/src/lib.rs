pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::{USER_ID_HEADER, UserId},
    projects::{
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        research_note_response::ResearchNoteResponse,
    },
    scripts::{
        script_dto::ScriptDto,
        script_response::ScriptResponse,
        suggestion_list_response::SuggestionListResponse,
        suggestion_requests::{AddSuggestionRequest, GenerateSuggestionsRequest},
    },
    storyboards::{
        storyboard_dto::StoryboardDto,
        storyboard_requests::{
            CreateStoryboardRequest, SceneCommentRequest, UpdateStoryboardRequest,
        },
        storyboard_response::{SceneIdeasResponse, StoryboardResponse},
    },
    transcripts::{
        search_query::SearchTranscriptsQuery,
        transcript_dto::TranscriptDto,
        transcript_response::{TranscriptListResponse, TranscriptResponse},
    },
};
pub use error::{Result as ServerErrorResult, ServerError};
pub use state::AppState;

pub use crate::routes::build_router;
