use crate::{ConfigError, ConfigErrorResult, Section, DEFAULT_UPLOAD_MAX_BYTES, MAX_UPLOAD_MAX_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_bytes == 0 || self.max_bytes > MAX_UPLOAD_MAX_BYTES {
            return Err(ConfigError::invalid(
                Section::Uploads,
                format!(
                    "uploads.max_bytes must be 1-{}, got {}",
                    MAX_UPLOAD_MAX_BYTES, self.max_bytes
                ),
            ));
        }
        Ok(())
    }
}
