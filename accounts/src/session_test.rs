use super::*;

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_without_stored_token_is_anonymous() {
    let store = MemoryTokenStore::default();
    let session = Session::restore(&store);
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn restore_with_stored_token_is_authenticated() {
    let store = MemoryTokenStore::with_token("tok123");
    let session = Session::restore(&store);
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok123"));
}

#[test]
fn restore_treats_empty_token_as_absent() {
    let store = MemoryTokenStore::with_token("");
    assert!(!Session::restore(&store).is_authenticated());
}

// =============================================================
// Sign in / sign out
// =============================================================

#[test]
fn sign_in_persists_and_authenticates() {
    let store = MemoryTokenStore::default();
    let mut session = Session::default();
    session.sign_in(&store, "tok123".to_owned()).expect("persist");
    assert_eq!(session.token(), Some("tok123"));
    assert_eq!(store.get().as_deref(), Some("tok123"));
}

#[test]
fn sign_in_replaces_previous_token() {
    let store = MemoryTokenStore::with_token("old");
    let mut session = Session::restore(&store);
    session.sign_in(&store, "new".to_owned()).expect("persist");
    assert_eq!(session.token(), Some("new"));
    assert_eq!(store.get().as_deref(), Some("new"));
}

#[test]
fn sign_in_keeps_memory_token_when_store_fails() {
    let store = MemoryTokenStore::read_only(None);
    let mut session = Session::default();
    assert!(matches!(session.sign_in(&store, "tok123".to_owned()), Err(SignInError::Store(_))));
    assert!(session.is_authenticated());
    assert_eq!(store.get(), None);
}

#[test]
fn sign_in_refuses_empty_token() {
    let store = MemoryTokenStore::default();
    let mut session = Session::default();
    assert_eq!(session.sign_in(&store, String::new()), Err(SignInError::EmptyToken));
    assert!(!session.is_authenticated());
    assert_eq!(store.get(), None);
    assert_eq!(Session::restore(&store), session);
}

#[test]
fn empty_token_leaves_existing_session_alone() {
    let store = MemoryTokenStore::with_token("tok123");
    let mut session = Session::restore(&store);
    assert!(session.sign_in(&store, String::new()).is_err());
    assert_eq!(session.token(), Some("tok123"));
    assert_eq!(Session::restore(&store), session);
}

#[test]
fn sign_out_clears_memory_and_store() {
    let store = MemoryTokenStore::with_token("tok123");
    let mut session = Session::restore(&store);
    session.sign_out(&store).expect("clear");
    assert!(!session.is_authenticated());
    assert_eq!(store.get(), None);
}

#[test]
fn sign_out_when_anonymous_is_harmless() {
    let store = MemoryTokenStore::default();
    let mut session = Session::default();
    session.sign_out(&store).expect("clear");
    assert!(!session.is_authenticated());
}

#[test]
fn sign_out_clears_memory_even_when_store_fails() {
    let store = MemoryTokenStore::read_only(Some("tok123"));
    let mut session = Session::restore(&store);
    assert!(session.sign_out(&store).is_err());
    assert!(!session.is_authenticated());
}

#[test]
fn storage_key_matches_browser_contract() {
    assert_eq!(TOKEN_STORAGE_KEY, "accessToken");
}
