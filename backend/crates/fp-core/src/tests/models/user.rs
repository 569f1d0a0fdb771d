use crate::{User, UserRole};

use std::str::FromStr;

#[test]
fn test_user_new_normalizes_username_and_email() {
    let user = User::new(
        "  dana  ",
        "  Dana@Example.COM ",
        "hash".to_string(),
        UserRole::Director,
    );

    assert_eq!(user.username, "dana");
    assert_eq!(user.email, "dana@example.com");
    assert!(user.project_ids.is_empty());
    assert!(user.avatar.is_empty());
}

#[test]
fn test_user_role_default_is_writer() {
    assert_eq!(UserRole::default(), UserRole::Writer);
}

#[test]
fn test_user_role_rejects_viewer() {
    assert!(UserRole::from_str("viewer").is_err());
    assert_eq!(
        UserRole::from_str("cinematographer").unwrap(),
        UserRole::Cinematographer
    );
}
