mod ai_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod upload_config;

#[cfg(test)]
mod tests;

pub use ai_config::AiConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult, Section};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use upload_config::UploadConfig;

const CONFIG_DIR_ENV: &str = "FP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".fp";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "film-production.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 64;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_AI_TIMEOUT_SECS: u64 = 120;
const MAX_AI_TIMEOUT_SECS: u64 = 600;
const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";
const DEFAULT_CHAT_MODEL: &str = "gpt-4";

/// 100 MiB
const DEFAULT_UPLOAD_MAX_BYTES: u64 = 100 * 1024 * 1024;
/// 1 GiB
const MAX_UPLOAD_MAX_BYTES: u64 = 1024 * 1024 * 1024;
