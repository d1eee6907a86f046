//! User list request lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user list page fetches once per mount. This model turns the fetch
//! result into what the page renders and keeps the 401 case distinguishable
//! so the page can offer an explicit sign-out.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use accounts::{ApiError, User, error::users_failure_message};

pub const LOADING_MESSAGE: &str = "Loading users...";
pub const EMPTY_MESSAGE: &str = "No users found.";

/// Failed fetch as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersFailure {
    pub message: String,
    /// The backend rejected the token (HTTP 401).
    pub unauthorized: bool,
}

impl From<&ApiError> for UsersFailure {
    fn from(err: &ApiError) -> Self {
        Self { message: users_failure_message(err), unauthorized: err.is_unauthorized() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UsersState {
    /// Mounted, fetch not yet issued.
    #[default]
    Idle,
    Loading,
    /// Users in backend order.
    Loaded(Vec<User>),
    Failed(UsersFailure),
}

impl UsersState {
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    pub fn finish(&mut self, result: Result<Vec<User>, ApiError>) {
        *self = match result {
            Ok(users) => Self::Loaded(users),
            Err(err) => Self::Failed(UsersFailure::from(&err)),
        };
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }
}
