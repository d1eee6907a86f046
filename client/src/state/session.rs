//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root view provides a [`SessionContext`] and every component that needs
//! the token reads it through the context's accessors. Writes go through
//! `sign_in`/`sign_out`, which update memory and `localStorage` in the same
//! synchronous step.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use accounts::{Session, SignInError, StoreError, TokenStore};
use leptos::prelude::*;

use crate::util::storage::LocalTokenStore;

/// What the root view should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootView {
    /// Storage has not been read yet (server render and first hydrate pass).
    Restoring,
    /// No token held; show the login form.
    SignedOut,
    /// A token is held; show the user list.
    SignedIn,
}

/// Session plus whether persistent storage has been consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Session,
    pub restored: bool,
}

impl SessionState {
    pub fn restore_from<S: TokenStore + ?Sized>(&mut self, store: &S) {
        self.session = Session::restore(store);
        self.restored = true;
    }

    /// Adopt `token`; memory changes even if `store` rejects the write.
    ///
    /// # Errors
    ///
    /// Propagates an empty-token refusal (nothing changes) or the store's
    /// failure to persist the token.
    pub fn sign_in_with<S: TokenStore + ?Sized>(&mut self, store: &S, token: String) -> Result<(), SignInError> {
        self.restored = true;
        self.session.sign_in(store, token)
    }

    /// Forget the token in memory and `store`.
    ///
    /// # Errors
    ///
    /// Propagates the store's failure to remove the token.
    pub fn sign_out_with<S: TokenStore + ?Sized>(&mut self, store: &S) -> Result<(), StoreError> {
        self.restored = true;
        self.session.sign_out(store)
    }

    #[must_use]
    pub fn view(&self) -> RootView {
        if !self.restored {
            RootView::Restoring
        } else if self.session.is_authenticated() {
            RootView::SignedIn
        } else {
            RootView::SignedOut
        }
    }
}

/// Handle to the reactive session, provided by the root view.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Load the token persisted by an earlier page view.
    pub fn restore(self) {
        self.state.update(|s| s.restore_from(&LocalTokenStore));
    }

    pub fn view(self) -> RootView {
        self.state.with(SessionState::view)
    }

    pub fn token(self) -> Option<String> {
        self.state.with(|s| s.session.token().map(ToOwned::to_owned))
    }

    pub fn token_untracked(self) -> Option<String> {
        self.state.with_untracked(|s| s.session.token().map(ToOwned::to_owned))
    }

    pub fn is_authenticated(self) -> bool {
        self.state.with(|s| s.session.is_authenticated())
    }

    /// Success callback for the login form.
    pub fn sign_in(self, token: String) {
        self.state.update(|s| {
            match s.sign_in_with(&LocalTokenStore, token) {
                Ok(()) => {}
                Err(SignInError::EmptyToken) => leptos::logging::warn!("ignored empty session token"),
                Err(SignInError::Store(e)) => leptos::logging::warn!("session token kept in memory only: {e}"),
            }
        });
    }

    pub fn sign_out(self) {
        self.state.update(|s| {
            if let Err(e) = s.sign_out_with(&LocalTokenStore) {
                leptos::logging::warn!("stored session token not removed: {e}");
            }
        });
    }
}

/// Session context provided by the root view.
///
/// # Panics
///
/// Panics when called outside the root view's component tree.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
