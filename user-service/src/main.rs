mod config;
mod handlers;

use anyhow::Result;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting User Service...");

    // Load configuration
    let config = Config::from_env()?;

    let app = app();

    // Start server
    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("User Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

// No routes: every method and path resolves to the status payload.
fn app() -> Router {
    Router::new()
        .fallback(handlers::status::service_status)
        .layer(TraceLayer::new_for_http())
}
