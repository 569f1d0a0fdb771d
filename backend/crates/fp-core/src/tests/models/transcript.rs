use crate::{CoreError, OriginalFile, Transcript, TranscriptStatus};

use uuid::Uuid;

fn upload() -> OriginalFile {
    OriginalFile {
        filename: "1700000000-take1.wav".to_string(),
        original_name: "take1.wav".to_string(),
        mimetype: "audio/wav".to_string(),
        size: 1024,
    }
}

fn transcript(title: &str) -> Transcript {
    Transcript::processing(
        Uuid::new_v4(),
        Uuid::new_v4(),
        title.to_string(),
        upload(),
        None,
    )
}

#[test]
fn test_new_transcript_is_processing_without_content() {
    let t = transcript("Take 1");

    assert_eq!(t.status, TranscriptStatus::Processing);
    assert!(t.content.is_none());
    assert_eq!(t.duration, "00:00:00");
    assert_eq!(t.language, "en");
}

#[test]
fn test_complete_sets_content() {
    let mut t = transcript("Take 1");

    t.complete("It was raining.".to_string()).unwrap();

    assert_eq!(t.status, TranscriptStatus::Completed);
    assert_eq!(t.content.as_deref(), Some("It was raining."));
}

#[test]
fn test_fail_leaves_content_unset() {
    let mut t = transcript("Take 1");

    t.fail().unwrap();

    assert_eq!(t.status, TranscriptStatus::Failed);
    assert!(t.content.is_none());
}

#[test]
fn test_terminal_states_do_not_transition() {
    let mut t = transcript("Take 1");
    t.fail().unwrap();

    let result = t.complete("late".to_string());

    assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));
    assert_eq!(t.status, TranscriptStatus::Failed);
}

#[test]
fn test_matches_query_on_title_content_and_tags() {
    let mut by_title = transcript("Rainy rooftop");
    by_title.tags = vec!["night".to_string()];
    assert!(by_title.matches_query("RAIN"));

    let mut by_content = transcript("Take 2");
    by_content.complete("The drain overflowed".to_string()).unwrap();
    assert!(by_content.matches_query("rain"));

    let mut by_tag = transcript("Take 3");
    by_tag.tags = vec!["Rain".to_string()];
    assert!(by_tag.matches_query("rain"));

    let mut partial_tag = transcript("Take 4");
    partial_tag.tags = vec!["rainfall".to_string()];
    assert!(!partial_tag.matches_query("rain"));
}

#[test]
fn test_original_file_media_check() {
    let mut file = upload();
    assert!(file.is_media());

    file.mimetype = "video/mp4".to_string();
    assert!(file.is_media());

    file.mimetype = "application/pdf".to_string();
    assert!(!file.is_media());
}
