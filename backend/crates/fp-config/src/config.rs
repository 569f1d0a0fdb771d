use crate::{
    AiConfig, CONFIG_DIR_ENV, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR, DatabaseConfig,
    LoggingConfig, ServerConfig, UploadConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub ai: AiConfig,
    pub uploads: UploadConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. FP_CONFIG_DIR env var, else ./.fp/
    /// 2. Create the config directory if missing
    /// 3. config.toml if it exists, else defaults
    /// 4. FP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: FP_CONFIG_DIR env var > ./.fp/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(ConfigError::working_dir)?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.ai.validate()?;
        self.uploads.validate()?;
        Ok(())
    }

    /// Absolute path to the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log configuration summary. The API key is never printed.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (pool {})",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  ai: {} [{} / {}] timeout={}s key={}",
            self.ai.base_url,
            self.ai.transcription_model,
            self.ai.chat_model,
            self.ai.timeout_secs,
            if self.ai.api_key.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!("  uploads: max {} bytes", self.uploads.max_bytes);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FP_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FP_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("FP_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("FP_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FP_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("FP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FP_LOG_FILE", &mut self.logging.file);

        // AI
        Self::apply_env_string("FP_AI_BASE_URL", &mut self.ai.base_url);
        Self::apply_env_option_string("FP_AI_API_KEY", &mut self.ai.api_key);
        Self::apply_env_parse("FP_AI_TIMEOUT_SECS", &mut self.ai.timeout_secs);
        Self::apply_env_string(
            "FP_AI_TRANSCRIPTION_MODEL",
            &mut self.ai.transcription_model,
        );
        Self::apply_env_string("FP_AI_CHAT_MODEL", &mut self.ai.chat_model);

        // Uploads
        Self::apply_env_parse("FP_UPLOAD_MAX_BYTES", &mut self.uploads.max_bytes);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma-separated
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
