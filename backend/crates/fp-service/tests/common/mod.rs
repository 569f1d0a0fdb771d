#![allow(dead_code)]

pub use fp_ai::testing::{FakeAi, FakeMode, TRANSCRIPT_TEXT};

use fp_db::MIGRATOR;
use fp_service::{
    NewCollaborator, NewProject, ProjectManager, Registration, ScriptManager, StoryboardManager,
    TranscriptManager, UserManager,
};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub const AI_TIMEOUT: Duration = Duration::from_millis(200);
pub const MAX_UPLOAD_BYTES: u64 = 1024;

/// All managers wired to one in-memory database and a scripted AI collaborator
pub struct Harness {
    pub pool: SqlitePool,
    pub ai: Arc<FakeAi>,
    pub users: UserManager,
    pub projects: ProjectManager,
    pub scripts: ScriptManager,
    pub storyboards: StoryboardManager,
    pub transcripts: TranscriptManager,
}

pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn harness(mode: FakeMode) -> Harness {
    let pool = create_test_pool().await;
    let ai = Arc::new(FakeAi::new(mode));

    Harness {
        users: UserManager::new(pool.clone()),
        projects: ProjectManager::new(pool.clone()),
        scripts: ScriptManager::new(pool.clone(), ai.clone(), AI_TIMEOUT),
        storyboards: StoryboardManager::new(pool.clone(), ai.clone(), AI_TIMEOUT),
        transcripts: TranscriptManager::new(
            pool.clone(),
            ai.clone(),
            AI_TIMEOUT,
            MAX_UPLOAD_BYTES,
        ),
        ai,
        pool,
    }
}

impl Harness {
    pub async fn user(&self, username: &str) -> Uuid {
        self.users
            .register(Registration {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password: "secret-password".to_string(),
                role: None,
            })
            .await
            .expect("Failed to register test user")
            .id
    }

    pub async fn project(&self, owner: Uuid, title: &str) -> Uuid {
        self.projects
            .create(
                owner,
                NewProject {
                    title: title.to_string(),
                    ..Default::default()
                },
            )
            .await
            .expect("Failed to create test project")
            .id
    }

    pub async fn share(&self, owner: Uuid, project_id: Uuid, user: Uuid, edit: bool, delete: bool) {
        self.projects
            .add_collaborator(
                owner,
                project_id,
                NewCollaborator {
                    user_id: user,
                    role: Some("editor".to_string()),
                    can_edit: edit,
                    can_delete: delete,
                },
            )
            .await
            .expect("Failed to add test collaborator");
    }
}
