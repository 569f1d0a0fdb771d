use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Production role a user registers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Director,
    #[default]
    Writer,
    Cinematographer,
    Editor,
    Producer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Director => "director",
            Self::Writer => "writer",
            Self::Cinematographer => "cinematographer",
            Self::Editor => "editor",
            Self::Producer => "producer",
        }
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "director" => Ok(Self::Director),
            "writer" => Ok(Self::Writer),
            "cinematographer" => Ok(Self::Cinematographer),
            "editor" => Ok(Self::Editor),
            "producer" => Ok(Self::Producer),
            _ => Err(CoreError::InvalidValue {
                kind: "role",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
