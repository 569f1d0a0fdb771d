pub mod error;
mod mapping;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::script_repository::ScriptRepository;
pub use repositories::storyboard_repository::StoryboardRepository;
pub use repositories::transcript_repository::TranscriptRepository;
pub use repositories::user_repository::UserRepository;

/// Embedded schema migrations for the SQLite store.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
