use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;

use super::*;

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
}

async fn login_handler(Form(creds): Form<Credentials>) -> impl IntoResponse {
    if creds.username == "admin" && creds.password == "secret" {
        (StatusCode::OK, Json(json!({ "access_token": "tok123", "token_type": "bearer" })))
    } else if creds.username == "blank" {
        (StatusCode::OK, Json(json!({ "access_token": "", "token_type": "bearer" })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Incorrect username or password" })))
    }
}

async fn users_handler(headers: HeaderMap) -> impl IntoResponse {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "Bearer tok123");
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Could not validate credentials" })));
    }
    (
        StatusCode::OK,
        Json(json!([{ "id": 1, "username": "alice", "email": "a@x.com", "is_active": true, "is_superuser": false }])),
    )
}

async fn spawn_backend() -> String {
    let router = Router::new()
        .route("/login/token", post(login_handler))
        .route("/users/", get(users_handler))
        .route("/users/me", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn login_returns_access_token() {
    let api = ApiClient::new(spawn_backend().await);
    let token = api.login("admin", "secret").await.expect("login");
    assert_eq!(token.access_token, "tok123");
}

#[tokio::test]
async fn login_rejection_carries_detail() {
    let api = ApiClient::new(spawn_backend().await);
    let err = api.login("admin", "wrong").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Unauthorized { detail: Some("Incorrect username or password".to_owned()) }
    );
}

#[tokio::test]
async fn login_with_empty_token_is_decode_error() {
    let api = ApiClient::new(spawn_backend().await);
    let err = api.login("blank", "secret").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn users_sends_bearer_token() {
    let api = ApiClient::new(spawn_backend().await);
    let users = api.users("tok123").await.expect("users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "alice");
}

#[tokio::test]
async fn users_with_bad_token_is_unauthorized() {
    let api = ApiClient::new(spawn_backend().await);
    let err = api.users("stale").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn non_json_error_body_has_no_detail() {
    let api = ApiClient::new(spawn_backend().await);
    let err = api.current_user("tok123").await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, detail: None });
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let api = ApiClient::new(format!("http://{addr}"));
    assert!(matches!(api.users("tok123").await, Err(ApiError::Transport(_))));
}
