pub mod ai_suggestion;
pub mod attribution;
pub mod camera_movement;
pub mod collaborator;
pub mod collaborator_role;
pub mod genre;
pub mod lighting;
pub mod original_file;
pub mod project;
pub mod project_status;
pub mod research_kind;
pub mod research_note;
pub mod scene;
pub mod scene_comment;
pub mod script;
pub mod script_metadata;
pub mod shot_type;
pub mod storyboard;
pub mod transcript;
pub mod transcript_status;
pub mod user;
pub mod user_role;
