use serde::Serialize;

/// Stable reason attached to every denial. Surfaced verbatim to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DenyReason {
    OwnerOnly,
    EditDenied,
    DeleteDenied,
    AccessDenied,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OwnerOnly => "owner-only",
            Self::EditDenied => "edit-denied",
            Self::DeleteDenied => "delete-denied",
            Self::AccessDenied => "access-denied",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
