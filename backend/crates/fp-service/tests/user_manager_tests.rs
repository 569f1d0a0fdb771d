mod common;

use common::{FakeMode, harness};

use fp_core::UserRole;
use fp_service::{ProfilePatch, Registration, ServiceError};

use googletest::prelude::*;

fn registration(username: &str, email: &str, password: &str) -> Registration {
    Registration {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: None,
    }
}

#[tokio::test]
async fn given_registration_when_registered_then_email_is_normalized_and_password_hashed() {
    let h = harness(FakeMode::Succeed).await;

    let user = h
        .users
        .register(registration("  Ava  ", "Ava@Example.COM", "secret-password"))
        .await
        .unwrap();

    assert_that!(user.username, eq("Ava"));
    assert_that!(user.email, eq("ava@example.com"));
    assert_that!(user.role, eq(UserRole::default()));
    assert!(user.password_hash != "secret-password");
}

#[tokio::test]
async fn given_taken_email_when_registering_then_conflict() {
    let h = harness(FakeMode::Succeed).await;
    h.users
        .register(registration("ava", "ava@example.com", "secret-password"))
        .await
        .unwrap();

    let result = h
        .users
        .register(registration("ava2", "AVA@example.com", "secret-password"))
        .await;

    assert!(matches!(result, Err(ServiceError::Conflict { .. })));
}

#[tokio::test]
async fn given_short_password_when_registering_then_validation_failed() {
    let h = harness(FakeMode::Succeed).await;

    let result = h
        .users
        .register(registration("ava", "ava@example.com", "12345"))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation { field: Some(ref f), .. }) if f == "password"
    ));
}

#[tokio::test]
async fn given_registered_user_when_authenticating_then_only_correct_password_passes() {
    // Given
    let h = harness(FakeMode::Succeed).await;
    let user = h
        .users
        .register(registration("ava", "ava@example.com", "secret-password"))
        .await
        .unwrap();

    // When
    let accepted = h
        .users
        .authenticate("AVA@example.com", "secret-password")
        .await;
    let wrong = h.users.authenticate("ava@example.com", "nope-nope").await;
    let unknown = h
        .users
        .authenticate("nobody@example.com", "secret-password")
        .await;

    // Then
    assert_that!(accepted.map(|u| u.id), ok(eq(&user.id)));
    for result in [wrong, unknown] {
        assert!(matches!(
            result,
            Err(ServiceError::AccessDenied { ref reason, .. }) if reason == "invalid-credentials"
        ));
    }
}

#[tokio::test]
async fn given_user_in_projects_when_loaded_then_project_ids_are_derived() {
    let h = harness(FakeMode::Succeed).await;
    let owner = h.user("owner").await;
    let member = h.user("member").await;
    let owned = h.project(owner, "Owned").await;
    let shared = h.project(member, "Shared").await;
    h.share(member, shared, owner, false, false).await;

    let user = h.users.get(owner).await.unwrap();

    assert_that!(user.project_ids, len(eq(2)));
    assert!(user.project_ids.contains(&owned));
    assert!(user.project_ids.contains(&shared));
}

#[tokio::test]
async fn given_other_user_when_updating_profile_then_self_only() {
    let h = harness(FakeMode::Succeed).await;
    let ava = h.user("ava").await;
    let ben = h.user("ben").await;

    let result = h
        .users
        .update_profile(
            ben,
            ava,
            ProfilePatch {
                username: Some("hijacked".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::AccessDenied { ref reason, .. }) if reason == "self-only"
    ));
    assert_that!(h.users.get(ava).await.unwrap().username, eq("ava"));
}

#[tokio::test]
async fn given_own_profile_when_updating_then_fields_change() {
    let h = harness(FakeMode::Succeed).await;
    let ava = h.user("ava").await;

    let updated = h
        .users
        .update_profile(
            ava,
            ava,
            ProfilePatch {
                role: Some("director".to_string()),
                avatar: Some("https://cdn.example.com/ava.png".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_that!(updated.role, eq(UserRole::Director));
    let stored = h.users.get(ava).await.unwrap();
    assert_that!(stored.role, eq(UserRole::Director));
    assert_that!(stored.avatar, eq("https://cdn.example.com/ava.png"));
}

#[tokio::test]
async fn given_email_taken_by_other_user_when_updating_profile_then_conflict() {
    let h = harness(FakeMode::Succeed).await;
    let ava = h.user("ava").await;
    h.user("ben").await;

    let result = h
        .users
        .update_profile(
            ava,
            ava,
            ProfilePatch {
                email: Some("ben@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(ServiceError::Conflict { .. })));
}
