pub mod project_repository;
pub mod script_repository;
pub mod storyboard_repository;
pub mod transcript_repository;
pub mod user_repository;
