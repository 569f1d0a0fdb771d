use crate::{
    Collaborator, CollaboratorRole, CoreError, Genre, Permissions, Project, ProjectStatus,
    ResearchKind, ResearchNote,
};

use googletest::prelude::*;
use uuid::Uuid;

fn editor(user_id: Uuid) -> Collaborator {
    Collaborator::new(
        user_id,
        CollaboratorRole::Editor,
        Permissions {
            can_edit: true,
            can_delete: false,
        },
    )
}

#[test]
fn test_project_new_uses_defaults() {
    let owner = Uuid::new_v4();
    let project = Project::new(owner, "Midnight".to_string());

    assert_that!(project.title, eq("Midnight"));
    assert_that!(project.genre, eq(Genre::Drama));
    assert_that!(project.status, eq(ProjectStatus::Planning));
    assert_that!(project.owner_id, eq(owner));
    assert_that!(project.collaborators, is_empty());
    assert_that!(project.script_id, none());
}

#[test]
fn test_add_collaborator_appends_once() {
    let mut project = Project::new(Uuid::new_v4(), "Midnight".to_string());
    let user = Uuid::new_v4();

    project.add_collaborator(editor(user)).unwrap();

    assert_that!(project.collaborators.len(), eq(1));
    assert!(project.is_member(user));
}

#[test]
fn test_add_collaborator_twice_is_duplicate() {
    let mut project = Project::new(Uuid::new_v4(), "Midnight".to_string());
    let user = Uuid::new_v4();
    project.add_collaborator(editor(user)).unwrap();

    let result = project.add_collaborator(editor(user));

    assert!(matches!(
        result,
        Err(CoreError::DuplicateCollaborator { user_id, .. }) if user_id == user
    ));
    assert_that!(project.collaborators.len(), eq(1));
}

#[test]
fn test_owner_cannot_be_collaborator() {
    let owner = Uuid::new_v4();
    let mut project = Project::new(owner, "Midnight".to_string());

    let result = project.add_collaborator(editor(owner));

    assert!(matches!(result, Err(CoreError::Validation { .. })));
    assert_that!(project.collaborators, is_empty());
}

#[test]
fn test_collaborator_order_is_preserved() {
    let mut project = Project::new(Uuid::new_v4(), "Midnight".to_string());
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    project.add_collaborator(editor(first)).unwrap();
    project.add_collaborator(editor(second)).unwrap();

    assert_that!(project.collaborators[0].user_id, eq(first));
    assert_that!(project.collaborators[1].user_id, eq(second));
}

#[test]
fn test_remove_unknown_collaborator_is_not_found() {
    let mut project = Project::new(Uuid::new_v4(), "Midnight".to_string());

    let result = project.remove_collaborator(Uuid::new_v4());

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[test]
fn test_set_status_rejects_backwards_move() {
    let mut project = Project::new(Uuid::new_v4(), "Midnight".to_string());
    project.set_status(ProjectStatus::Production).unwrap();

    let result = project.set_status(ProjectStatus::PreProduction);

    assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));
    assert_that!(project.status, eq(ProjectStatus::Production));
}

#[test]
fn test_research_notes_add_and_remove() {
    let mut project = Project::new(Uuid::new_v4(), "Midnight".to_string());
    let note = ResearchNote::new(
        "Noir lighting".to_string(),
        "Look at The Third Man".to_string(),
        ResearchKind::Reference,
    );
    let note_id = note.id;

    project.add_research_note(note);
    assert_that!(project.research.len(), eq(1));

    let removed = project.remove_research_note(note_id).unwrap();
    assert_that!(removed.title, eq("Noir lighting"));
    assert_that!(project.research, is_empty());
}
