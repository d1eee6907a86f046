//! Wire DTOs for the Access Manager backend.
//!
//! DESIGN
//! ======
//! Only the fields the client renders are required. Everything else the
//! backend's `UserRead` schema carries is optional so older or trimmed
//! backends still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A user account as returned by `GET /users/` and `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned unique identifier.
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub is_superuser: bool,
    /// ISO-8601 creation timestamp, if the backend sends one.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO-8601 last-update timestamp, if the backend sends one.
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl User {
    /// Comma-separated role names, or `"-"` when the user has none.
    #[must_use]
    pub fn role_names(&self) -> String {
        if self.roles.is_empty() {
            return "-".to_owned();
        }
        self.roles
            .iter()
            .map(|role| role.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A role attached to a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// A named permission granted through a role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Successful body of `POST /login/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

impl TokenResponse {
    /// `self`, unless the backend issued an empty token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when `access_token` is empty.
    pub fn checked(self) -> Result<Self, ApiError> {
        if self.access_token.is_empty() {
            return Err(ApiError::Decode("empty access_token".to_owned()));
        }
        Ok(self)
    }
}

fn default_token_type() -> String {
    "bearer".to_owned()
}
