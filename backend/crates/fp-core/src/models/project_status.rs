use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Production lifecycle stage of a project.
///
/// Variants are declared in production order; a project only ever moves
/// forward through them (see [`ProjectStatus::can_transition_to`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    PreProduction,
    Production,
    PostProduction,
    Completed,
}

impl ProjectStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::PreProduction => "pre-production",
            Self::Production => "production",
            Self::PostProduction => "post-production",
            Self::Completed => "completed",
        }
    }

    /// Staying put or skipping ahead is allowed; going back is not.
    pub fn can_transition_to(&self, next: ProjectStatus) -> bool {
        next >= *self
    }

    pub fn is_completed(&self) -> bool {
        *self == Self::Completed
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "planning" => Ok(Self::Planning),
            "pre-production" => Ok(Self::PreProduction),
            "production" => Ok(Self::Production),
            "post-production" => Ok(Self::PostProduction),
            "completed" => Ok(Self::Completed),
            _ => Err(CoreError::InvalidValue {
                kind: "project status",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
