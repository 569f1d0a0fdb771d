mod common;

use common::{FakeMode, harness};

use fp_core::ShotType;
use fp_service::{NewProject, SceneInput, SceneInputPatch, ServiceError};

use googletest::prelude::*;

fn scene(id: &str, title: &str, order: i32) -> SceneInput {
    SceneInput {
        id: Some(id.to_string()),
        title: title.to_string(),
        order,
        ..Default::default()
    }
}

#[tokio::test]
async fn given_scenes_added_out_of_order_when_loaded_then_sorted_by_order() {
    // Given
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let project_id = h.project(owner, "Boards").await;
    let board = h.storyboards.create(owner, project_id, "Act One").await.unwrap();

    // When
    h.storyboards
        .add_scene(owner, board.id, scene("s2", "Docks", 2))
        .await
        .unwrap();
    h.storyboards
        .add_scene(owner, board.id, scene("s1", "Harbour", 1))
        .await
        .unwrap();

    // Then
    let stored = h.storyboards.get(owner, board.id).await.unwrap();
    let ids: Vec<&str> = stored.scenes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2"]);
    assert_that!(stored.version, eq(3));
}

#[tokio::test]
async fn given_taken_order_when_adding_scene_then_conflict() {
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let project_id = h.project(owner, "Orders").await;
    let board = h.storyboards.create(owner, project_id, "Act One").await.unwrap();
    h.storyboards
        .add_scene(owner, board.id, scene("s1", "Harbour", 1))
        .await
        .unwrap();

    let result = h
        .storyboards
        .add_scene(owner, board.id, scene("s2", "Docks", 1))
        .await;

    assert!(matches!(result, Err(ServiceError::Conflict { .. })));
    let stored = h.storyboards.get(owner, board.id).await.unwrap();
    assert_that!(stored.scenes, len(eq(1)));
}

#[tokio::test]
async fn given_unknown_shot_type_when_adding_scene_then_validation_failed() {
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let project_id = h.project(owner, "Shots").await;
    let board = h.storyboards.create(owner, project_id, "Act One").await.unwrap();

    let result = h
        .storyboards
        .add_scene(
            owner,
            board.id,
            SceneInput {
                shot_type: Some("fisheye".to_string()),
                ..scene("s1", "Harbour", 1)
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation { field: Some(ref f), .. }) if f == "shot_type"
    ));
}

#[tokio::test]
async fn given_scene_when_updated_then_only_patched_fields_change() {
    // Given
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let project_id = h.project(owner, "Patch").await;
    let board = h.storyboards.create(owner, project_id, "Act One").await.unwrap();
    h.storyboards
        .add_scene(
            owner,
            board.id,
            SceneInput {
                description: Some("Fog rolls in".to_string()),
                ..scene("s1", "Harbour", 1)
            },
        )
        .await
        .unwrap();

    // When
    let updated = h
        .storyboards
        .update_scene(
            owner,
            board.id,
            "s1",
            SceneInputPatch {
                shot_type: Some("close-up".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Then
    let s1 = &updated.scenes[0];
    assert_that!(s1.title, eq("Harbour"));
    assert_that!(s1.description, some(eq("Fog rolls in")));
    assert_that!(s1.shot_type, some(eq(ShotType::CloseUp)));
}

#[tokio::test]
async fn given_scene_when_removed_then_board_is_empty() {
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let project_id = h.project(owner, "Remove").await;
    let board = h.storyboards.create(owner, project_id, "Act One").await.unwrap();
    h.storyboards
        .add_scene(owner, board.id, scene("s1", "Harbour", 1))
        .await
        .unwrap();

    let updated = h.storyboards.remove_scene(owner, board.id, "s1").await.unwrap();

    assert_that!(updated.scenes, len(eq(0)));
    assert!(matches!(
        h.storyboards.remove_scene(owner, board.id, "s1").await,
        Err(ServiceError::NotFound { .. })
    ));
}

#[tokio::test]
async fn given_viewer_when_commenting_then_comment_is_kept_without_editing() {
    // Given
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let viewer = h.user("viewer").await;
    let project_id = h.project(owner, "Review").await;
    h.share(owner, project_id, viewer, false, false).await;
    let board = h.storyboards.create(owner, project_id, "Act One").await.unwrap();
    h.storyboards
        .add_scene(owner, board.id, scene("s1", "Harbour", 1))
        .await
        .unwrap();
    let before = h.storyboards.get(owner, board.id).await.unwrap();

    // When
    let commented = h
        .storyboards
        .add_scene_comment(viewer, board.id, "s1", "Too dark")
        .await
        .unwrap();

    // Then
    let comments = &commented.scenes[0].comments;
    assert_that!(comments, len(eq(1)));
    assert_that!(comments[0].user_id, eq(viewer));
    assert_that!(comments[0].comment, eq("Too dark"));
    assert_that!(commented.last_edited, eq(before.last_edited));

    assert!(matches!(
        h.storyboards
            .add_scene(viewer, board.id, scene("s2", "Docks", 2))
            .await,
        Err(ServiceError::AccessDenied { .. })
    ));
}

#[tokio::test]
async fn given_existing_storyboard_when_creating_another_then_conflict() {
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let project_id = h.project(owner, "Single").await;
    h.storyboards.create(owner, project_id, "Act One").await.unwrap();

    let result = h.storyboards.create(owner, project_id, "Act Two").await;

    assert!(matches!(result, Err(ServiceError::Conflict { .. })));
}

#[tokio::test]
async fn given_title_update_when_saved_then_version_increments() {
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let project_id = h.project(owner, "Rename").await;
    let board = h.storyboards.create(owner, project_id, "Act One").await.unwrap();

    let updated = h
        .storyboards
        .update(owner, board.id, Some("Act One (revised)"))
        .await
        .unwrap();

    assert_that!(updated.title, eq("Act One (revised)"));
    assert_that!(updated.version, eq(2));
    let stored = h.storyboards.get_for_project(owner, project_id).await.unwrap();
    assert_that!(stored.title, eq("Act One (revised)"));
}

#[tokio::test]
async fn given_scene_when_generating_ideas_then_project_genre_is_used() {
    // Given
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let project = h
        .projects
        .create(
            owner,
            NewProject {
                title: "Dread".to_string(),
                genre: Some("horror".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let board = h.storyboards.create(owner, project.id, "Act One").await.unwrap();
    h.storyboards
        .add_scene(
            owner,
            board.id,
            SceneInput {
                description: Some("A door creaks open".to_string()),
                ..scene("s1", "Hallway", 1)
            },
        )
        .await
        .unwrap();

    // When
    let ideas = h
        .storyboards
        .generate_ideas(owner, board.id, "s1")
        .await
        .unwrap();

    // Then
    assert_that!(ideas, eq("horror: A door creaks open"));
}

#[tokio::test]
async fn given_hanging_ai_when_generating_ideas_then_upstream_after_timeout() {
    let h = harness(FakeMode::Hang).await;
    let owner = h.user("owner").await;
    let project_id = h.project(owner, "Slow").await;
    let board = h.storyboards.create(owner, project_id, "Act One").await.unwrap();
    h.storyboards
        .add_scene(owner, board.id, scene("s1", "Harbour", 1))
        .await
        .unwrap();

    let result = h.storyboards.generate_ideas(owner, board.id, "s1").await;

    assert!(matches!(result, Err(ServiceError::Upstream { .. })));
}

#[tokio::test]
async fn given_collaborator_with_delete_flag_when_deleting_owners_board_then_allowed() {
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let cleaner = h.user("cleaner").await;
    let project_id = h.project(owner, "Tidy").await;
    h.share(owner, project_id, cleaner, false, true).await;
    let board = h.storyboards.create(owner, project_id, "Act One").await.unwrap();

    h.storyboards.delete(cleaner, board.id).await.unwrap();

    assert!(matches!(
        h.storyboards.get_for_project(owner, project_id).await,
        Err(ServiceError::NotFound { .. })
    ));
}
