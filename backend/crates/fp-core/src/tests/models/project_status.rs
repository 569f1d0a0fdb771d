use crate::{CoreError, ProjectStatus};

use std::str::FromStr;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::Planning.as_str(), "planning");
    assert_eq!(ProjectStatus::PreProduction.as_str(), "pre-production");
    assert_eq!(ProjectStatus::PostProduction.as_str(), "post-production");
}

#[test]
fn test_project_status_from_str() {
    assert_eq!(
        ProjectStatus::from_str("production").unwrap(),
        ProjectStatus::Production
    );
    assert_eq!(
        ProjectStatus::from_str("completed").unwrap(),
        ProjectStatus::Completed
    );
    assert!(ProjectStatus::from_str("wrapped").is_err());
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Planning);
}

#[test]
fn test_project_status_display_matches_as_str() {
    assert_eq!(ProjectStatus::PreProduction.to_string(), "pre-production");
}

#[test]
fn test_project_status_forward_only() {
    assert!(ProjectStatus::Planning.can_transition_to(ProjectStatus::Planning));
    assert!(ProjectStatus::Planning.can_transition_to(ProjectStatus::Production));
    assert!(ProjectStatus::PostProduction.can_transition_to(ProjectStatus::Completed));
    assert!(!ProjectStatus::Production.can_transition_to(ProjectStatus::Planning));
    assert!(!ProjectStatus::Completed.can_transition_to(ProjectStatus::PostProduction));
}

#[test]
fn test_project_status_from_str_unknown_names_invalid_value() {
    match ProjectStatus::from_str("wrapped") {
        Err(CoreError::InvalidValue { kind, value, .. }) => {
            assert_eq!(kind, "project status");
            assert_eq!(value, "wrapped");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}
