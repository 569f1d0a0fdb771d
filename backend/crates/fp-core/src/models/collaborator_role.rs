use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role a collaborator holds inside one project.
/// Mirrors [`crate::UserRole`] plus a read-mostly `viewer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CollaboratorRole {
    Director,
    Writer,
    Cinematographer,
    Editor,
    Producer,
    #[default]
    Viewer,
}

impl CollaboratorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Director => "director",
            Self::Writer => "writer",
            Self::Cinematographer => "cinematographer",
            Self::Editor => "editor",
            Self::Producer => "producer",
            Self::Viewer => "viewer",
        }
    }
}

impl FromStr for CollaboratorRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "director" => Ok(Self::Director),
            "writer" => Ok(Self::Writer),
            "cinematographer" => Ok(Self::Cinematographer),
            "editor" => Ok(Self::Editor),
            "producer" => Ok(Self::Producer),
            "viewer" => Ok(Self::Viewer),
            _ => Err(CoreError::InvalidValue {
                kind: "collaborator role",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for CollaboratorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
