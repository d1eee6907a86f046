//! Browser `localStorage` access for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`LocalTokenStore`] is the browser implementation of
//! `accounts::TokenStore`. Only the session context uses it; pages and
//! components never touch storage directly.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths have no storage: loads return `None` and writes fail, which the
//! session treats as a memory-only session.

use accounts::{StoreError, TOKEN_STORAGE_KEY, TokenStore};

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StoreError("localStorage unavailable".to_owned()))
}

/// Token store backed by `localStorage[TOKEN_STORAGE_KEY]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(TOKEN_STORAGE_KEY, token)
                .map_err(|e| StoreError(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StoreError(format!("no browser storage for {TOKEN_STORAGE_KEY}")))
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(TOKEN_STORAGE_KEY)
                .map_err(|e| StoreError(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError(format!("no browser storage for {TOKEN_STORAGE_KEY}")))
        }
    }
}
