use crate::{
    ConfigError, ConfigErrorResult, Section, DEFAULT_AI_BASE_URL, DEFAULT_AI_TIMEOUT_SECS,
    DEFAULT_CHAT_MODEL, DEFAULT_TRANSCRIPTION_MODEL, MAX_AI_TIMEOUT_SECS,
};

use serde::Deserialize;

/// OpenAI-compatible provider settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Upper bound on any single provider call
    pub timeout_secs: u64,
    pub transcription_model: String,
    pub chat_model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_AI_BASE_URL),
            api_key: None,
            timeout_secs: DEFAULT_AI_TIMEOUT_SECS,
            transcription_model: String::from(DEFAULT_TRANSCRIPTION_MODEL),
            chat_model: String::from(DEFAULT_CHAT_MODEL),
        }
    }
}

impl AiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                Section::Ai,
                format!("ai.base_url must be an http(s) URL, got '{}'", self.base_url),
            ));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_AI_TIMEOUT_SECS {
            return Err(ConfigError::invalid(
                Section::Ai,
                format!(
                    "ai.timeout_secs must be 1-{}, got {}",
                    MAX_AI_TIMEOUT_SECS, self.timeout_secs
                ),
            ));
        }

        if self.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            return Err(ConfigError::invalid(
                Section::Ai,
                "ai.api_key cannot be blank when set",
            ));
        }

        Ok(())
    }
}
