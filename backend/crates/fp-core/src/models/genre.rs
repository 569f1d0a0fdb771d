use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Project genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    #[default]
    Drama,
    Comedy,
    Thriller,
    Horror,
    Documentary,
    Animation,
    Other,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drama => "drama",
            Self::Comedy => "comedy",
            Self::Thriller => "thriller",
            Self::Horror => "horror",
            Self::Documentary => "documentary",
            Self::Animation => "animation",
            Self::Other => "other",
        }
    }
}

impl FromStr for Genre {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "drama" => Ok(Self::Drama),
            "comedy" => Ok(Self::Comedy),
            "thriller" => Ok(Self::Thriller),
            "horror" => Ok(Self::Horror),
            "documentary" => Ok(Self::Documentary),
            "animation" => Ok(Self::Animation),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidValue {
                kind: "genre",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
