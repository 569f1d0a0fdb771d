pub mod project_manager;
pub mod script_manager;
pub mod storyboard_manager;
pub mod transcript_manager;
pub mod user_manager;
