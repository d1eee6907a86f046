use super::*;

fn alice() -> User {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "username": "alice",
        "email": "a@x.com",
        "is_active": true,
        "is_superuser": false
    }))
    .expect("user")
}

#[test]
fn idle_and_loading_render_as_loading() {
    let mut state = UsersState::default();
    assert!(state.is_loading());
    state.begin();
    assert_eq!(state, UsersState::Loading);
    assert!(state.is_loading());
}

#[test]
fn finish_ok_keeps_backend_order() {
    let mut bob = alice();
    bob.id = 2;
    bob.username = "bob".to_owned();
    let mut state = UsersState::Loading;
    state.finish(Ok(vec![bob.clone(), alice()]));
    assert_eq!(state, UsersState::Loaded(vec![bob, alice()]));
}

#[test]
fn finish_ok_empty_is_loaded_not_failed() {
    let mut state = UsersState::Loading;
    state.finish(Ok(Vec::new()));
    assert_eq!(state, UsersState::Loaded(Vec::new()));
    assert!(!state.is_loading());
}

#[test]
fn finish_401_is_flagged_unauthorized() {
    let mut state = UsersState::Loading;
    state.finish(Err(ApiError::from_response(401, r#"{"detail":"Could not validate credentials"}"#)));
    assert_eq!(
        state,
        UsersState::Failed(UsersFailure {
            message: "Unauthorized. Please login again.".to_owned(),
            unauthorized: true,
        })
    );
}

#[test]
fn finish_other_error_uses_detail() {
    let mut state = UsersState::Loading;
    state.finish(Err(ApiError::from_response(403, r#"{"detail":"Not enough permissions"}"#)));
    assert_eq!(
        state,
        UsersState::Failed(UsersFailure { message: "Not enough permissions".to_owned(), unauthorized: false })
    );
}

#[test]
fn finish_transport_error_uses_generic_message() {
    let mut state = UsersState::Loading;
    state.finish(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(
        state,
        UsersState::Failed(UsersFailure { message: "Failed to fetch users.".to_owned(), unauthorized: false })
    );
}

#[test]
fn begin_clears_previous_failure() {
    let mut state = UsersState::Failed(UsersFailure { message: "x".to_owned(), unauthorized: false });
    state.begin();
    assert_eq!(state, UsersState::Loading);
}
