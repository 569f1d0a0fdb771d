use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Framing of a storyboard scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShotType {
    Wide,
    Medium,
    CloseUp,
    ExtremeCloseUp,
    Overhead,
    LowAngle,
    HighAngle,
}

impl ShotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Medium => "medium",
            Self::CloseUp => "close-up",
            Self::ExtremeCloseUp => "extreme-close-up",
            Self::Overhead => "overhead",
            Self::LowAngle => "low-angle",
            Self::HighAngle => "high-angle",
        }
    }
}

impl FromStr for ShotType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "wide" => Ok(Self::Wide),
            "medium" => Ok(Self::Medium),
            "close-up" => Ok(Self::CloseUp),
            "extreme-close-up" => Ok(Self::ExtremeCloseUp),
            "overhead" => Ok(Self::Overhead),
            "low-angle" => Ok(Self::LowAngle),
            "high-angle" => Ok(Self::HighAngle),
            _ => Err(CoreError::InvalidValue {
                kind: "shot type",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ShotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
