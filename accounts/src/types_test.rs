use super::*;

#[test]
fn user_deserializes_minimal_record() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "username": "alice",
        "email": "a@x.com",
        "is_active": true,
        "is_superuser": false
    }))
    .expect("user");
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "a@x.com");
    assert!(user.is_active);
    assert!(!user.is_superuser);
    assert!(user.roles.is_empty());
    assert_eq!(user.created_at, None);
}

#[test]
fn user_deserializes_full_backend_record() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "username": "root",
        "email": "root@x.com",
        "is_active": true,
        "is_superuser": true,
        "created_at": "2024-01-01T00:00:00",
        "updated_at": "2024-02-01T00:00:00",
        "roles": [{
            "id": 3,
            "name": "admin",
            "description": null,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00",
            "permissions": [{ "id": 9, "name": "read_users", "description": "List users" }]
        }]
    }))
    .expect("user");
    assert_eq!(user.roles.len(), 1);
    assert_eq!(user.roles[0].name, "admin");
    assert_eq!(user.roles[0].permissions[0].name, "read_users");
    assert_eq!(user.updated_at.as_deref(), Some("2024-02-01T00:00:00"));
}

#[test]
fn user_missing_required_field_is_rejected() {
    let result = serde_json::from_value::<User>(serde_json::json!({
        "id": 1,
        "username": "alice",
        "is_active": true,
        "is_superuser": false
    }));
    assert!(result.is_err());
}

#[test]
fn user_list_preserves_backend_order() {
    let users: Vec<User> = serde_json::from_value(serde_json::json!([
        { "id": 2, "username": "zed", "email": "z@x.com", "is_active": true, "is_superuser": false },
        { "id": 1, "username": "amy", "email": "a@x.com", "is_active": false, "is_superuser": true }
    ]))
    .expect("users");
    let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["zed", "amy"]);
}

#[test]
fn role_names_joins_or_dashes() {
    let mut user: User = serde_json::from_value(serde_json::json!({
        "id": 1, "username": "a", "email": "a@x.com", "is_active": true, "is_superuser": false
    }))
    .expect("user");
    assert_eq!(user.role_names(), "-");
    user.roles = vec![
        Role { id: 1, name: "admin".to_owned(), description: None, permissions: Vec::new() },
        Role { id: 2, name: "auditor".to_owned(), description: None, permissions: Vec::new() },
    ];
    assert_eq!(user.role_names(), "admin, auditor");
}

#[test]
fn token_response_defaults_token_type() {
    let body: TokenResponse =
        serde_json::from_str(r#"{"access_token":"tok123"}"#).expect("token response");
    assert_eq!(body.access_token, "tok123");
    assert_eq!(body.token_type, "bearer");
}

#[test]
fn token_response_without_access_token_is_rejected() {
    assert!(serde_json::from_str::<TokenResponse>(r#"{"token_type":"bearer"}"#).is_err());
}

#[test]
fn token_response_with_empty_token_is_refused() {
    let body: TokenResponse = serde_json::from_str(r#"{"access_token": ""}"#).expect("token");
    let err = body.checked().expect_err("empty token");
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(crate::error::login_failure_message(&err), "Login failed. Please try again.");
}

#[test]
fn token_response_with_token_passes_check() {
    let body: TokenResponse = serde_json::from_str(r#"{"access_token": "tok123"}"#).expect("token");
    assert_eq!(body.checked().expect("token").access_token, "tok123");
}
