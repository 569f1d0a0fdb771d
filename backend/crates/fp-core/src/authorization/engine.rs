use crate::{Action, Decision, DenyReason, Project};

use uuid::Uuid;

/// Decide whether `principal` may perform `action` on `project`.
///
/// Pure: no I/O, no caching. Callers must re-evaluate on every request
/// because the collaborator list can change between calls.
pub fn decide(principal: Uuid, project: &Project, action: Action) -> Decision {
    let is_owner = project.is_owner(principal);
    let collaborator = project.collaborator(principal);

    match action {
        Action::ManageCollaborators | Action::Delete => {
            if is_owner {
                Decision::Allow
            } else {
                Decision::Deny(DenyReason::OwnerOnly)
            }
        }
        Action::Edit => {
            if is_owner || collaborator.is_some_and(|c| c.permissions.can_edit) {
                Decision::Allow
            } else {
                Decision::Deny(DenyReason::EditDenied)
            }
        }
        Action::DeleteAttached { author_id } => {
            // The author keeps delete rights only while still on the project.
            let allowed = is_owner
                || collaborator.is_some_and(|c| c.permissions.can_delete)
                || (principal == author_id && collaborator.is_some());

            if allowed {
                Decision::Allow
            } else {
                Decision::Deny(DenyReason::DeleteDenied)
            }
        }
        Action::Read => {
            if is_owner || collaborator.is_some() {
                Decision::Allow
            } else {
                Decision::Deny(DenyReason::AccessDenied)
            }
        }
    }
}
