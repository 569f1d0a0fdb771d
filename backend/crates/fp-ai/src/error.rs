use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("AI provider returned {status}: {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("AI provider returned no usable content {location}")]
    EmptyResponse { location: ErrorLocation },
}

impl AiError {
    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        AiError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_response() -> Self {
        AiError::EmptyResponse {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AiError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, AiError>;
