//! Host configuration from the process environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads an optional `.env` with `dotenvy` and then calls
//! [`Config::from_env`]. Parsing goes through a lookup function so tests do
//! not have to mutate the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected 1-65535")]
    InvalidPort(String),
    #[error("invalid ACCESS_MANAGER_API_URL {0:?}: expected an http:// or https:// URL")]
    InvalidApiUrl(String),
}

/// Settings for the host process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Listen port on all interfaces.
    pub port: u16,
    /// Backend base URL handed to the browser.
    pub api_base_url: String,
}

impl Config {
    /// Read `PORT` and `ACCESS_MANAGER_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty());

        let port = match read("PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        let api_base_url = match read("ACCESS_MANAGER_API_URL") {
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                raw.trim_end_matches('/').to_owned()
            }
            Some(raw) => return Err(ConfigError::InvalidApiUrl(raw)),
            None => DEFAULT_API_BASE_URL.to_owned(),
        };

        Ok(Self { port, api_base_url })
    }
}
