use crate::{DenyReason, ErrorLocation};

use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid {kind}: {value} {location}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid status transition: {from} -> {to} {location}")]
    InvalidTransition {
        from: String,
        to: String,
        location: ErrorLocation,
    },

    #[error("Access denied: {reason} {location}")]
    AccessDenied {
        reason: DenyReason,
        location: ErrorLocation,
    },

    #[error("User {user_id} is already a collaborator {location}")]
    DuplicateCollaborator {
        user_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Duplicate scene {field}: {value} {location}")]
    DuplicateScene {
        field: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("{entity} {id} not found {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
