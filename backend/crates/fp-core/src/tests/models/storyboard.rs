use crate::{CoreError, Scene, ScenePatch, ShotType, Storyboard};

use googletest::prelude::*;
use uuid::Uuid;

fn storyboard() -> Storyboard {
    Storyboard::new(Uuid::new_v4(), Uuid::new_v4(), "Act One".to_string())
}

#[test]
fn test_scenes_are_kept_sorted_by_order() {
    let mut board = storyboard();
    board
        .add_scene(Scene::new("s3".to_string(), "Roof".to_string(), 3))
        .unwrap();
    board
        .add_scene(Scene::new("s1".to_string(), "Street".to_string(), 1))
        .unwrap();

    let ids: Vec<&str> = board.scenes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s3"]);
}

#[test]
fn test_duplicate_scene_order_is_rejected() {
    let mut board = storyboard();
    board
        .add_scene(Scene::new("s1".to_string(), "Street".to_string(), 1))
        .unwrap();

    let result = board.add_scene(Scene::new("s2".to_string(), "Alley".to_string(), 1));

    assert!(matches!(
        result,
        Err(CoreError::DuplicateScene { field: "order", .. })
    ));
    assert_that!(board.scenes.len(), eq(1));
}

#[test]
fn test_duplicate_scene_id_is_rejected() {
    let mut board = storyboard();
    board
        .add_scene(Scene::new("s1".to_string(), "Street".to_string(), 1))
        .unwrap();

    let result = board.add_scene(Scene::new("s1".to_string(), "Alley".to_string(), 2));

    assert!(matches!(
        result,
        Err(CoreError::DuplicateScene { field: "id", .. })
    ));
}

#[test]
fn test_update_scene_may_keep_its_own_order() {
    let mut board = storyboard();
    board
        .add_scene(Scene::new("s1".to_string(), "Street".to_string(), 1))
        .unwrap();

    board
        .update_scene(
            "s1",
            ScenePatch {
                order: Some(1),
                shot_type: Some(ShotType::CloseUp),
                ..ScenePatch::default()
            },
        )
        .unwrap();

    assert_that!(board.scenes[0].shot_type, some(eq(ShotType::CloseUp)));
}

#[test]
fn test_update_scene_cannot_take_another_order() {
    let mut board = storyboard();
    board
        .add_scene(Scene::new("s1".to_string(), "Street".to_string(), 1))
        .unwrap();
    board
        .add_scene(Scene::new("s2".to_string(), "Alley".to_string(), 2))
        .unwrap();

    let result = board.update_scene(
        "s2",
        ScenePatch {
            order: Some(1),
            ..ScenePatch::default()
        },
    );

    assert!(matches!(result, Err(CoreError::DuplicateScene { .. })));
}

#[test]
fn test_comments_are_appended() {
    let mut board = storyboard();
    board
        .add_scene(Scene::new("s1".to_string(), "Street".to_string(), 1))
        .unwrap();
    let user = Uuid::new_v4();

    board.add_comment("s1", user, "Wider?".to_string()).unwrap();
    board.add_comment("s1", user, "Or dolly in".to_string()).unwrap();

    let comments = &board.scenes[0].comments;
    assert_that!(comments.len(), eq(2));
    assert_that!(comments[1].comment, eq("Or dolly in"));
}

#[test]
fn test_comment_on_missing_scene_is_not_found() {
    let mut board = storyboard();

    let result = board.add_comment("nope", Uuid::new_v4(), "hello".to_string());

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}
