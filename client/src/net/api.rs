//! REST calls against the Access Manager backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error, since the token
//! lives in browser storage and never reaches the server.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Non-2xx responses are
//! classified by status so callers can tell a 401 apart from other failures
//! and surface the backend's `detail` text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use accounts::{ApiError, TokenResponse, User};
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

/// Content type of the credential exchange body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

/// Form fields sent to the token endpoint, in wire order.
#[cfg(any(test, feature = "hydrate"))]
fn login_form_fields<'a>(username: &'a str, password: &'a str) -> [(&'static str, &'a str); 2] {
    [("username", username), ("password", password)]
}

/// Decode a 2xx body into `T`.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_error(value: &wasm_bindgen::JsValue) -> ApiError {
    use wasm_bindgen::JsCast;

    let message = value
        .dyn_ref::<js_sys::Error>()
        .map_or_else(|| format!("{value:?}"), |e| String::from(e.message()));
    ApiError::Transport(message)
}

/// Turn a response into `T`, classifying non-2xx statuses.
#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport_error)?;
    if !resp.ok() {
        log::debug!("{} answered {status}", resp.url());
        return Err(ApiError::from_response(status, &body));
    }
    parse_body(&body)
}

#[cfg(feature = "hydrate")]
async fn get_authorized<T: DeserializeOwned>(api: &ApiConfig, path: &str, token: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&api.url(path))
        .header("Authorization", &accounts::bearer(token))
        .send()
        .await
        .map_err(transport_error)?;
    read_json(resp).await
}

/// Exchange credentials for a token via `POST /login/token`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for rejected credentials,
/// [`ApiError::Decode`] for a body without a usable token, another
/// [`ApiError`] variant for transport or status failures.
pub async fn login(api: &ApiConfig, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::UrlSearchParams::new().map_err(|e| js_error(&e))?;
        for (name, value) in login_form_fields(username, password) {
            form.append(name, value);
        }
        let resp = gloo_net::http::Request::post(&api.url(accounts::LOGIN_TOKEN_PATH))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(form)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_json::<TokenResponse>(resp).await?.checked()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, username, password);
        Err(ApiError::Transport(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Fetch all user accounts via `GET /users/`, in backend order.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the token is missing, expired or
/// revoked, another [`ApiError`] variant for everything else.
pub async fn fetch_users(api: &ApiConfig, token: &str) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_authorized(api, accounts::USERS_PATH, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, token);
        Err(ApiError::Transport(SERVER_UNAVAILABLE.to_owned()))
    }
}

/// Fetch the signed-in account via `GET /users/me`.
///
/// # Errors
///
/// Same taxonomy as [`fetch_users`].
pub async fn fetch_current_user(api: &ApiConfig, token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_authorized(api, accounts::CURRENT_USER_PATH, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, token);
        Err(ApiError::Transport(SERVER_UNAVAILABLE.to_owned()))
    }
}
