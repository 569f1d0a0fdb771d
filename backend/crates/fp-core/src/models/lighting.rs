use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Lighting setup for a storyboard scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lighting {
    Natural,
    Studio,
    Practical,
    Motivated,
    HighKey,
    LowKey,
}

impl Lighting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Studio => "studio",
            Self::Practical => "practical",
            Self::Motivated => "motivated",
            Self::HighKey => "high-key",
            Self::LowKey => "low-key",
        }
    }
}

impl FromStr for Lighting {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "natural" => Ok(Self::Natural),
            "studio" => Ok(Self::Studio),
            "practical" => Ok(Self::Practical),
            "motivated" => Ok(Self::Motivated),
            "high-key" => Ok(Self::HighKey),
            "low-key" => Ok(Self::LowKey),
            _ => Err(CoreError::InvalidValue {
                kind: "lighting",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Lighting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
