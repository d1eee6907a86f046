//! Async HTTP calls to the Access Manager backend via `reqwest`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use accounts::{ApiError, TokenResponse, User};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

/// Thin client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    if !status.is_success() {
        return Err(ApiError::from_response(status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        accounts::endpoint(&self.base_url, path)
    }

    /// `POST /login/token` with form-encoded credentials. An empty token is a
    /// decode failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let resp = self
            .http
            .post(self.url(accounts::LOGIN_TOKEN_PATH))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(transport)?;
        read_json::<TokenResponse>(resp).await?.checked()
    }

    /// `GET /users/` with the bearer token.
    pub async fn users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        self.get_authorized(accounts::USERS_PATH, token).await
    }

    /// `GET /users/me` with the bearer token.
    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        self.get_authorized(accounts::CURRENT_USER_PATH, token).await
    }

    async fn get_authorized<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        let resp = self
            .http
            .get(self.url(path))
            .header(AUTHORIZATION, accounts::bearer(token))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
}
