use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT, Section};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let invalid = |message: String| Err(ConfigError::invalid(Section::Server, message));

        // 0 lets the OS pick a port
        if self.port != 0 && self.port < MIN_PORT {
            return invalid(format!(
                "server.port must be 0 (auto) or >= {MIN_PORT}, got {}",
                self.port
            ));
        }

        if self.host.trim().is_empty() {
            return invalid("server.host cannot be empty".to_string());
        }

        if let Some(origin) = self
            .cors_origins
            .iter()
            .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
        {
            return invalid(format!(
                "server.cors_origins entries must be http(s) origins, got '{origin}'"
            ));
        }

        Ok(())
    }
}
