//! Authorization engine.
//!
//! Every access question in the system is answered here, from a principal,
//! a project and an action. Attached entities (script, storyboard,
//! transcript) are authorized against their parent project.

mod action;
mod decision;
mod deny_reason;
mod engine;

pub use action::Action;
pub use decision::Decision;
pub use deny_reason::DenyReason;
pub use engine::decide;
