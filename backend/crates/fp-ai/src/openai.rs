use crate::{AiCollaborator, AiError, AiResult};

use async_trait::async_trait;
use reqwest::{
    Client as ReqwestClient, RequestBuilder, Response,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4";

const SUGGESTION_MAX_TOKENS: u32 = 500;
const SUGGESTION_TEMPERATURE: f32 = 0.7;
const IDEAS_MAX_TOKENS: u32 = 400;
const IDEAS_TEMPERATURE: f32 = 0.8;

/// HTTP client for an OpenAI-compatible API
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    transcription_model: String,
    chat_model: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiClient {
    /// Create a client
    ///
    /// # Arguments
    /// * `base_url` - API root including version (e.g., "https://api.openai.com/v1")
    /// * `api_key` - Sent as a bearer token
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            transcription_model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn with_models(mut self, transcription_model: &str, chat_model: &str) -> Self {
        self.transcription_model = transcription_model.to_string();
        self.chat_model = chat_model.to_string();
        self
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }

    /// Fail on non-2xx, surfacing the provider's own error message when present
    async fn check(response: Response) -> AiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or(body);

        Err(AiError::api(status.as_u16(), message))
    }

    async fn chat(&self, prompt: &str, max_tokens: u32, temperature: f32) -> AiResult<String> {
        let body = ChatRequest {
            model: &self.chat_model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            temperature,
        };

        let response = self.post("/chat/completions").json(&body).send().await?;
        let completion: ChatResponse = Self::check(response).await?.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(AiError::empty_response)
    }
}

#[async_trait]
impl AiCollaborator for OpenAiClient {
    async fn transcribe(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        mimetype: &str,
    ) -> AiResult<String> {
        log::debug!("Transcribing {filename} ({mimetype}, {} bytes)", bytes.len());

        let file = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mimetype)?;
        let form = Form::new()
            .text("model", self.transcription_model.clone())
            .part("file", file);

        let response = self
            .post("/audio/transcriptions")
            .multipart(form)
            .send()
            .await?;
        let transcription: TranscriptionResponse = Self::check(response).await?.json().await?;

        Ok(transcription.text)
    }

    async fn suggest_script_improvements(
        &self,
        excerpt: &str,
        context: Option<&str>,
    ) -> AiResult<Vec<String>> {
        let prompt = script_prompt(excerpt, context);
        let reply = self
            .chat(&prompt, SUGGESTION_MAX_TOKENS, SUGGESTION_TEMPERATURE)
            .await?;

        Ok(parse_bullets(&reply))
    }

    async fn suggest_storyboard_ideas(&self, description: &str, genre: &str) -> AiResult<String> {
        let prompt = storyboard_prompt(description, genre);
        self.chat(&prompt, IDEAS_MAX_TOKENS, IDEAS_TEMPERATURE)
            .await
    }
}

fn script_prompt(excerpt: &str, context: Option<&str>) -> String {
    format!(
        "You are an experienced screenwriter. Read the script excerpt below and give \
         between three and five concrete suggestions to improve it.\n\n\
         Excerpt:\n{excerpt}\n\n\
         Context: {}\n\n\
         Consider characters, dialogue, scene structure, pacing and visual storytelling.\n\
         Write each suggestion as a single bullet line starting with \"- \".",
        context.unwrap_or("General script improvement"),
    )
}

fn storyboard_prompt(description: &str, genre: &str) -> String {
    format!(
        "You are a cinematographer preparing a storyboard. Suggest how to shoot this scene.\n\n\
         Scene: {description}\n\
         Genre: {genre}\n\n\
         Cover shot types and angles, lighting, composition, camera movement and visual style.\n\
         Answer as a structured storyboard note."
    )
}

/// Extract bullet lines (`-` or `•`) from a model reply, stripped of the marker.
pub fn parse_bullets(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            line.strip_prefix('-')
                .or_else(|| line.strip_prefix('•'))
        })
        .map(|rest| rest.trim_start().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
