use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Edit,
    /// Delete the project itself
    Delete,
    ManageCollaborators,
    /// Delete a script, storyboard or transcript of the project.
    ///
    /// The author only keeps this right while still on the project; once
    /// removed from the collaborators they need the owner or `can_delete`.
    DeleteAttached { author_id: Uuid },
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::ManageCollaborators => "manage-collaborators",
            Self::DeleteAttached { .. } => "delete-attached",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
