#![allow(dead_code)]

use fp_core::{
    Collaborator, CollaboratorRole, OriginalFile, Permissions, Project, Script, Storyboard,
    Transcript,
};
use uuid::Uuid;

pub fn create_test_project(owner_id: Uuid) -> Project {
    let mut project = Project::new(owner_id, "Test Project".to_string());
    project.description = Some("Test project description".to_string());
    project
}

pub fn create_test_collaborator(user_id: Uuid, can_edit: bool, can_delete: bool) -> Collaborator {
    Collaborator::new(
        user_id,
        CollaboratorRole::Editor,
        Permissions {
            can_edit,
            can_delete,
        },
    )
}

pub fn create_test_script(project_id: Uuid, author_id: Uuid) -> Script {
    Script::new(
        project_id,
        author_id,
        "Draft One".to_string(),
        "INT. KITCHEN - NIGHT\nShe waits.\nCUT TO:\nEXT. STREET".to_string(),
    )
}

pub fn create_test_storyboard(project_id: Uuid, author_id: Uuid) -> Storyboard {
    Storyboard::new(project_id, author_id, "Boards".to_string())
}

pub fn create_test_transcript(project_id: Uuid, uploaded_by: Uuid, title: &str) -> Transcript {
    Transcript::processing(
        project_id,
        uploaded_by,
        title.to_string(),
        OriginalFile {
            filename: format!("{}.mp3", Uuid::new_v4()),
            original_name: "take1.mp3".to_string(),
            mimetype: "audio/mpeg".to_string(),
            size: 1024,
        },
        None,
    )
}
