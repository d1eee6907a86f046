//! Shared account model and session contract for the Access Manager client.
//!
//! This crate owns the wire representation of the backend's `/login/token`
//! and `/users/` endpoints, the typed error every caller classifies failures
//! with, and the token session state machine. Both `client` (browser) and
//! `cli` depend on it, so it stays free of any runtime or browser dependency.

pub mod error;
pub mod session;
pub mod types;

pub use error::ApiError;
pub use session::{MemoryTokenStore, Session, SignInError, StoreError, TOKEN_STORAGE_KEY, TokenStore};
pub use types::{Permission, Role, TokenResponse, User};

/// Authentication endpoint accepting form-encoded credentials.
pub const LOGIN_TOKEN_PATH: &str = "/login/token";
/// Protected user collection endpoint.
pub const USERS_PATH: &str = "/users/";
/// Protected endpoint describing the caller's own account.
pub const CURRENT_USER_PATH: &str = "/users/me";
/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Join the backend base URL and an absolute endpoint path.
///
/// Trailing slashes on `base` are dropped so `http://host/` and `http://host`
/// produce the same URL.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Value for the `Authorization` header of a protected request.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
