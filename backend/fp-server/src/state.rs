use fp_ai::AiCollaborator;
use fp_service::{
    ProjectManager, ScriptManager, StoryboardManager, TranscriptManager, UserManager,
};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared handler state. Cloned per request; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: Arc<UserManager>,
    pub projects: Arc<ProjectManager>,
    pub scripts: Arc<ScriptManager>,
    pub storyboards: Arc<StoryboardManager>,
    pub transcripts: Arc<TranscriptManager>,
    pub max_upload_bytes: u64,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        ai: Arc<dyn AiCollaborator>,
        ai_timeout: Duration,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            users: Arc::new(UserManager::new(pool.clone())),
            projects: Arc::new(ProjectManager::new(pool.clone())),
            scripts: Arc::new(ScriptManager::new(pool.clone(), ai.clone(), ai_timeout)),
            storyboards: Arc::new(StoryboardManager::new(
                pool.clone(),
                ai.clone(),
                ai_timeout,
            )),
            transcripts: Arc::new(TranscriptManager::new(
                pool.clone(),
                ai,
                ai_timeout,
                max_upload_bytes,
            )),
            max_upload_bytes,
            pool,
        }
    }
}
