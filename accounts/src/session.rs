//! Token session shared by every Access Manager front end.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues an opaque bearer token; front ends keep it in memory and
//! mirror it to a persistent [`TokenStore`] (browser `localStorage`, a file
//! for the CLI). [`Session`] is the only code that writes either copy, so the
//! in-memory and persisted token can never disagree after a transition.
//!
//! No expiry is tracked. A stale token is discovered when a protected call
//! answers 401.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

/// Storage key under which the raw token string is persisted.
pub const TOKEN_STORAGE_KEY: &str = "accessToken";

/// Persistent storage rejected a read or write.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("token storage unavailable: {0}")]
pub struct StoreError(pub String);

/// A token could not be adopted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    /// The backend answered with an empty `access_token`. Nothing changes.
    #[error("backend issued an empty access token")]
    EmptyToken,
    /// The token is held in memory but was not persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Persistent home of the session token.
pub trait TokenStore {
    /// Previously saved token, if any.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any earlier value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage rejects the write.
    fn save(&self, token: &str) -> Result<(), StoreError>;
    /// Remove the persisted token. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage rejects the removal.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process store used by tests and as a fallback when no persistent
/// storage exists.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
    read_only: bool,
}

impl MemoryTokenStore {
    /// Store pre-populated with `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: RefCell::new(Some(token.to_owned())), read_only: false }
    }

    /// Store whose writes always fail, as a full or disabled `localStorage` does.
    #[must_use]
    pub fn read_only(token: Option<&str>) -> Self {
        Self { slot: RefCell::new(token.map(ToOwned::to_owned)), read_only: true }
    }

    /// Current persisted value.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.get()
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError("store is read-only".to_owned()));
        }
        *self.slot.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError("store is read-only".to_owned()));
        }
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// In-memory authentication state.
///
/// Authenticated if and only if a token is held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Rehydrate from `store` without validating the token against the backend.
    ///
    /// An empty stored string counts as no token.
    #[must_use]
    pub fn restore<S: TokenStore + ?Sized>(store: &S) -> Self {
        Self { token: store.load().filter(|token| !token.is_empty()) }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Adopt a freshly issued token and persist it.
    ///
    /// An empty token is refused before either copy is touched, since
    /// [`Session::restore`] would read it back as no token. Otherwise the
    /// in-memory token is updated even if persisting fails; the session then
    /// lasts only until the page (or process) goes away.
    ///
    /// # Errors
    ///
    /// [`SignInError::EmptyToken`] for an empty token, or
    /// [`SignInError::Store`] when the token could not be persisted.
    pub fn sign_in<S: TokenStore + ?Sized>(&mut self, store: &S, token: String) -> Result<(), SignInError> {
        if token.is_empty() {
            return Err(SignInError::EmptyToken);
        }
        let persisted = store.save(&token);
        self.token = Some(token);
        persisted.map_err(SignInError::from)
    }

    /// Drop the token from memory and storage. No network call is made.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the persisted copy could not be removed.
    /// Memory is cleared regardless.
    pub fn sign_out<S: TokenStore + ?Sized>(&mut self, store: &S) -> Result<(), StoreError> {
        self.token = None;
        store.clear()
    }
}
