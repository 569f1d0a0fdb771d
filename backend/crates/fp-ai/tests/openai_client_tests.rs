//! Integration tests for the OpenAI client using wiremock mock server

use fp_ai::{AiCollaborator, AiError, OpenAiClient};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

#[tokio::test]
async fn given_chat_reply_with_bullets_when_suggesting_script_improvements_then_bullets_returned()
{
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_string_contains("INT. HARBOUR"))
        .and(body_string_contains("\"model\":\"gpt-4\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "Sure:\n- Open on the boat\n• Let the silence run\nThanks"
                }
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = OpenAiClient::new(&format!("{}/v1", mock_server.uri()), "test-key");
    let suggestions = client
        .suggest_script_improvements("INT. HARBOUR - DAWN", Some("pacing"))
        .await
        .unwrap();

    assert_eq!(
        suggestions,
        vec!["Open on the boat".to_string(), "Let the silence run".to_string()]
    );
}

#[tokio::test]
async fn given_chat_reply_when_suggesting_storyboard_ideas_then_full_text_returned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("thriller"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Low-angle wide, hard key light." } }]
        })))
        .mount(&mock_server)
        .await;

    let client = OpenAiClient::new(&mock_server.uri(), "test-key");
    let ideas = client
        .suggest_storyboard_ideas("A chase across rooftops", "thriller")
        .await
        .unwrap();

    assert_eq!(ideas, "Low-angle wide, hard key light.");
}

#[tokio::test]
async fn given_audio_upload_when_transcribing_then_multipart_sent_and_text_returned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(body_string_contains("whisper-1"))
        .and(body_string_contains("take1.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "We meet at the harbour."
        })))
        .mount(&mock_server)
        .await;

    let client = OpenAiClient::new(&mock_server.uri(), "test-key");
    let text = client
        .transcribe(b"ID3fake".to_vec(), "take1.mp3", "audio/mpeg")
        .await
        .unwrap();

    assert_eq!(text, "We meet at the harbour.");
}

#[tokio::test]
async fn given_provider_error_when_calling_then_api_error_with_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "Rate limit reached" }
        })))
        .mount(&mock_server)
        .await;

    let client = OpenAiClient::new(&mock_server.uri(), "test-key");
    let result = client.suggest_storyboard_ideas("Anything", "drama").await;

    let err = result.unwrap_err();
    assert!(matches!(err, AiError::Api { status: 429, .. }));
    assert!(err.to_string().contains("Rate limit reached"));
}

#[tokio::test]
async fn given_no_choices_when_chatting_then_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&mock_server)
        .await;

    let client = OpenAiClient::new(&mock_server.uri(), "test-key");
    let result = client.suggest_storyboard_ideas("Anything", "drama").await;

    assert!(matches!(result, Err(AiError::EmptyResponse { .. })));
}
