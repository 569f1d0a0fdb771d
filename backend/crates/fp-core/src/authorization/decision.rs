use crate::{CoreError, DenyReason, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Turn a denial into [`CoreError::AccessDenied`] carrying its reason.
    #[track_caller]
    pub fn into_result(self) -> CoreErrorResult<()> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(CoreError::AccessDenied {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
