use fp_ai::AiError;
use fp_core::{CoreError, ErrorLocation};
use fp_db::DbError;

use std::panic::Location;

use thiserror::Error;

/// Outcome taxonomy shared by every manager.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{entity} {id} not found {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    /// `reason` is a stable kebab-case code such as `owner-only`.
    #[error("Access denied: {reason} {location}")]
    AccessDenied {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Upstream failure: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn access_denied(reason: impl Into<String>) -> Self {
        Self::AccessDenied {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::AccessDenied { reason, .. } => Self::AccessDenied {
                reason: reason.as_str().to_string(),
                location,
            },
            CoreError::NotFound { entity, id, .. } => Self::NotFound {
                entity,
                id,
                location,
            },
            CoreError::DuplicateCollaborator { user_id, .. } => Self::Conflict {
                message: format!("User {user_id} is already a collaborator"),
                location,
            },
            CoreError::DuplicateScene { field, value, .. } => Self::Conflict {
                message: format!("A scene with {field} '{value}' already exists"),
                location,
            },
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidValue { kind, value, .. } => Self::Validation {
                message: format!("Invalid {kind}: {value}"),
                field: None,
                location,
            },
            CoreError::InvalidTransition { from, to, .. } => Self::Validation {
                message: format!("Cannot move from {from} to {to}"),
                field: Some("status".to_string()),
                location,
            },
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            DbError::UniqueViolation { message, .. } => Self::Conflict { message, location },
            other => Self::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<AiError> for ServiceError {
    #[track_caller]
    fn from(err: AiError) -> Self {
        Self::Upstream {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
