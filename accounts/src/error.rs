//! Typed failures for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Transports (gloo-net in the browser, reqwest in the CLI) convert their own
//! errors into [`ApiError`] so callers branch on one taxonomy: transport,
//! unauthorized, rejected with a status, or an undecodable success body.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Message shown when a login attempt fails without a backend explanation.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
/// Message shown when the user list is rejected with HTTP 401.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized. Please login again.";
/// Message shown when the user list fails without a backend explanation.
pub const FETCH_USERS_FAILED_MESSAGE: &str = "Failed to fetch users.";

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered 401.
    #[error("unauthorized")]
    Unauthorized { detail: Option<String> },
    /// The backend answered with another non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// A 2xx response whose body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response from its status code and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = parse_detail(body);
        if status == 401 {
            Self::Unauthorized { detail }
        } else {
            Self::Status { status, detail }
        }
    }

    /// Human-readable reason supplied by the backend, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Status { detail, .. } => detail.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Extract a string `detail` field from an error body.
///
/// Validation errors carry `detail` as an array of objects; those are not a
/// single displayable message and yield `None`, as do non-JSON bodies.
#[must_use]
pub fn parse_detail(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    value
        .get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(ToOwned::to_owned)
}

/// Message displayed by the login view for a failed attempt.
#[must_use]
pub fn login_failure_message(err: &ApiError) -> String {
    err.detail().unwrap_or(LOGIN_FAILED_MESSAGE).to_owned()
}

/// Message displayed by the user list view for a failed fetch.
///
/// A 401 always maps to [`UNAUTHORIZED_MESSAGE`], even when the backend
/// supplied its own detail.
#[must_use]
pub fn users_failure_message(err: &ApiError) -> String {
    if err.is_unauthorized() {
        return UNAUTHORIZED_MESSAGE.to_owned();
    }
    err.detail().unwrap_or(FETCH_USERS_FAILED_MESSAGE).to_owned()
}
