use crate::models::user_profile::{PLACEHOLDER_EMAIL, PLACEHOLDER_PROVIDER, PLACEHOLDER_USERNAME};
use crate::{ProfileOverrides, Role, UserProfile};

use serde_json::json;

const STAMP: &str = "2024-01-01T00:00:00.000Z";

#[test]
fn test_placeholder_defaults() {
    let user = UserProfile::placeholder(STAMP);

    assert_eq!(user.id, 1);
    assert_eq!(user.username, PLACEHOLDER_USERNAME);
    assert_eq!(user.email, PLACEHOLDER_EMAIL);
    assert_eq!(user.provider, PLACEHOLDER_PROVIDER);
    assert!(user.confirmed);
    assert!(!user.blocked);
    assert!(user.role.is_none());
    assert_eq!(user.created_at, STAMP);
    assert_eq!(user.updated_at, STAMP);
}

#[test]
fn test_overrides_replace_only_given_fields() {
    let user = UserProfile::placeholder(STAMP).with_overrides(ProfileOverrides::default().username("x"));

    assert_eq!(
        user,
        UserProfile {
            username: "x".to_string(),
            ..UserProfile::placeholder(STAMP)
        }
    );
}

#[test]
fn test_overrides_role_and_flags() {
    let role = Role {
        id: 2,
        name: "Authenticated".to_string(),
        description: None,
        role_type: Some("authenticated".to_string()),
    };
    let overrides = ProfileOverrides {
        id: Some(42),
        blocked: Some(true),
        role: Some(role.clone()),
        ..Default::default()
    };

    let user = UserProfile::placeholder(STAMP).with_overrides(overrides);

    assert_eq!(user.id, 42);
    assert!(user.blocked);
    assert_eq!(user.role, Some(role));
    assert_eq!(user.username, PLACEHOLDER_USERNAME);
}

#[test]
fn test_backend_user_round_trips_with_unknown_fields() {
    let raw = json!({
        "id": 5,
        "documentId": "k3x9q",
        "username": "ada",
        "email": "ada@example.com",
        "provider": "local",
        "confirmed": true,
        "blocked": false,
        "role": { "id": 1, "name": "Authenticated", "type": "authenticated" },
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": "2024-05-02T10:00:00.000Z",
        "publishedAt": "2024-05-01T10:00:00.000Z"
    });

    let user: UserProfile = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(user.extra.get("documentId"), Some(&json!("k3x9q")));
    assert_eq!(
        user.role.as_ref().and_then(|r| r.role_type.as_deref()),
        Some("authenticated")
    );

    let reparsed: UserProfile =
        serde_json::from_str(&serde_json::to_string(&user).unwrap()).unwrap();
    assert_eq!(reparsed, user);
    assert_eq!(serde_json::to_value(&user).unwrap(), raw);
}

#[test]
fn test_camel_case_field_names() {
    let value = serde_json::to_value(UserProfile::placeholder(STAMP)).unwrap();
    assert_eq!(value["createdAt"], STAMP);
    assert_eq!(value["updatedAt"], STAMP);
    assert!(value.get("role").is_none());
    assert!(value.get("resetPasswordToken").is_none());
}
