use crate::{CoreError, Script, ScriptMetadata};

use googletest::prelude::*;
use uuid::Uuid;

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

#[test]
fn test_metadata_counts_whitespace_tokens() {
    assert_that!(ScriptMetadata::word_count("INT. HOUSE  -  NIGHT\n\tJohn enters."), eq(6));
    assert_that!(ScriptMetadata::word_count("   "), eq(0));
}

#[test]
fn test_page_count_rounds_up() {
    assert_that!(ScriptMetadata::page_count(0), eq(0));
    assert_that!(ScriptMetadata::page_count(1), eq(1));
    assert_that!(ScriptMetadata::page_count(200), eq(1));
    assert_that!(ScriptMetadata::page_count(201), eq(2));
}

#[test]
fn test_scene_count_counts_cut_markers() {
    let content = "FADE IN: CUT TO: the street. CUT TO: the roof. cut to: ignored";
    assert_that!(ScriptMetadata::scene_count(content), eq(2));
}

#[test]
fn test_script_with_450_words_and_two_cuts() {
    // 446 plain words + "CUT TO:" twice (2 tokens each) = 450 tokens
    let content = format!("{} CUT TO: {} CUT TO:", words(200), words(246));
    let script = Script::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Midnight".to_string(),
        content,
    );

    assert_that!(script.metadata.word_count, eq(450));
    assert_that!(script.metadata.page_count, eq(3));
    assert_that!(script.metadata.scene_count, eq(2));
    assert_that!(script.version, eq(1));
}

#[test]
fn test_set_content_recomputes_metadata() {
    let mut script = Script::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Midnight".to_string(),
        words(10),
    );

    script.set_content(words(401));

    assert_that!(script.metadata.word_count, eq(401));
    assert_that!(script.metadata.page_count, eq(3));
}

#[test]
fn test_touch_bumps_version() {
    let mut script = Script::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Midnight".to_string(),
        words(3),
    );
    let before = script.metadata.last_edited;

    script.touch();

    assert_that!(script.version, eq(2));
    assert!(script.metadata.last_edited >= before);
}

#[test]
fn test_bump_keeps_last_edited() {
    let mut script = Script::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Midnight".to_string(),
        words(3),
    );
    let before = script.metadata.last_edited;

    script.bump();

    assert_that!(script.version, eq(2));
    assert_that!(script.metadata.last_edited, eq(before));
}

#[test]
fn test_apply_suggestion_twice_is_idempotent() {
    let mut script = Script::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Midnight".to_string(),
        words(3),
    );
    let id = script.add_suggestion("Tighten the opening".to_string()).id;

    script.apply_suggestion(id).unwrap();
    script.apply_suggestion(id).unwrap();

    assert_that!(script.ai_suggestions.len(), eq(1));
    assert!(script.ai_suggestions[0].applied);
}

#[test]
fn test_apply_unknown_suggestion_is_not_found() {
    let mut script = Script::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Midnight".to_string(),
        words(3),
    );

    let result = script.apply_suggestion(Uuid::new_v4());

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[test]
fn test_credit_does_not_duplicate() {
    let author = Uuid::new_v4();
    let mut script = Script::new(Uuid::new_v4(), author, "Midnight".to_string(), words(3));

    script.credit(author, "writer");

    assert_that!(script.collaborators.len(), eq(1));
}
