//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It server-renders the Leptos shell at
//! `/`, serves the compiled WASM/JS bundle under `/pkg`, and answers
//! `/healthz`. The browser talks to the Access Manager backend directly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ServeError;

/// Routes that do not depend on Leptos configuration.
pub fn host_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host router: health check, static bundle, and the SSR app.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &Config) -> Result<Router, ServeError> {
    let conf = get_configuration(None).map_err(|e| ServeError::Leptos(e.to_string()))?;
    Ok(app_with_options(config, conf.leptos_options))
}

/// Host router over already-resolved Leptos options.
pub fn app_with_options(config: &Config, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let api = client::config::ApiConfig::new(config.api_base_url.clone());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone(), api.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    host_routes()
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
