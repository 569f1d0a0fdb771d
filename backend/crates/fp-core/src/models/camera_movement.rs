use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Camera movement for a storyboard scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraMovement {
    Static,
    Pan,
    Tilt,
    Zoom,
    Track,
    Dolly,
    Crane,
}

impl CameraMovement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Pan => "pan",
            Self::Tilt => "tilt",
            Self::Zoom => "zoom",
            Self::Track => "track",
            Self::Dolly => "dolly",
            Self::Crane => "crane",
        }
    }
}

impl FromStr for CameraMovement {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "static" => Ok(Self::Static),
            "pan" => Ok(Self::Pan),
            "tilt" => Ok(Self::Tilt),
            "zoom" => Ok(Self::Zoom),
            "track" => Ok(Self::Track),
            "dolly" => Ok(Self::Dolly),
            "crane" => Ok(Self::Crane),
            _ => Err(CoreError::InvalidValue {
                kind: "camera movement",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for CameraMovement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
