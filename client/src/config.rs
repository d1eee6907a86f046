//! Backend location for API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the configured base URL into a `<meta>` tag of the shell;
//! the browser build reads it back at startup. Builds served without the host
//! fall back to `ACCESS_MANAGER_API_URL` captured at compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use accounts::DEFAULT_API_BASE_URL;

/// `name` of the shell `<meta>` tag carrying the backend base URL.
pub const API_META_NAME: &str = "access-manager-api";

/// Where the backend API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(option_env!("ACCESS_MANAGER_API_URL").map(ToOwned::to_owned))
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Pick `candidate` when it is non-blank, otherwise the built-in default.
    #[must_use]
    pub fn resolve(candidate: Option<String>) -> Self {
        let base_url = candidate
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        Self { base_url }
    }

    /// Read the base URL from the shell's `<meta>` tag.
    ///
    /// Outside the browser, or when the tag is missing, returns [`Self::default`].
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|meta| meta.get_attribute("content"));
            match content {
                Some(url) if !url.trim().is_empty() => Self::resolve(Some(url)),
                _ => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Absolute URL of an endpoint path on this backend.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        accounts::endpoint(&self.base_url, path)
    }
}
