//! Porch: a static site server with a JSON API.
//!
//! This is the application entry point. It initializes tracing, resolves
//! configuration from the environment, assembles the Axum router, and runs
//! the HTTP server until shutdown.

use porch::config::{AppConfig, DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT, LOG_FORMAT_ENV};
use porch::http::start_server;
use porch::routes::create_router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    let log_format =
        std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| DEFAULT_LOG_FORMAT.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Resolve configuration once; it is immutable for the process lifetime
    let config = AppConfig::from_env()?;
    tracing::info!(
        port = config.http.port,
        static_root = %config.static_files.root.display(),
        "Loaded configuration"
    );

    // Create router
    let app = create_router(&config);

    // Start server; a bind failure propagates and exits the process non-zero
    start_server(app, &config).await?;

    Ok(())
}
