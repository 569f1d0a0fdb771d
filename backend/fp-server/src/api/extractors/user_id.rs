//! Axum extractor for the request principal

use crate::ApiError;

use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The authenticated user, taken from the `X-User-Id` header.
///
/// A missing or malformed header is rejected with 401.
pub struct UserId(pub Uuid);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header_value) = parts.headers.get(USER_ID_HEADER) else {
            return Err(ApiError::Unauthorized {
                message: format!("Missing {USER_ID_HEADER} header"),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let raw = header_value.to_str().unwrap_or_default().trim();
        match Uuid::parse_str(raw) {
            Ok(uuid) => {
                log::debug!("Principal from {}: {}", USER_ID_HEADER, uuid);
                Ok(UserId(uuid))
            }
            Err(_) => {
                log::warn!("Invalid UUID in {} header: {}", USER_ID_HEADER, raw);
                Err(ApiError::Unauthorized {
                    message: format!("Malformed {USER_ID_HEADER} header"),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
