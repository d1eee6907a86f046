mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::ServeError;

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    // A missing .env file is normal outside local development.
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into())))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let config = Config::from_env()?;
    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, api = %config.api_base_url, "access manager client listening");
    axum::serve(listener, app).await?;
    Ok(())
}
