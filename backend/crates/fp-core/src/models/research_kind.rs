use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of a research note attached to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResearchKind {
    #[default]
    Note,
    Reference,
    Inspiration,
}

impl ResearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Reference => "reference",
            Self::Inspiration => "inspiration",
        }
    }
}

impl FromStr for ResearchKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "note" => Ok(Self::Note),
            "reference" => Ok(Self::Reference),
            "inspiration" => Ok(Self::Inspiration),
            _ => Err(CoreError::InvalidValue {
                kind: "research kind",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ResearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
