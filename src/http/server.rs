//! HTTP server startup logic.

use std::io;
use std::net::{SocketAddr, TcpListener};

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{addr}': {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

/// Bind the listener and serve requests until shutdown.
///
/// The listener is bound before the startup line is logged, so a port
/// already in use surfaces as a `Bind` error and the process exits non-zero
/// without ever claiming to be listening.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let raw_addr = format!("{}:{}", config.http.host, config.http.port);
    let addr: SocketAddr = raw_addr.parse().map_err(|source| ServerError::Address {
        addr: raw_addr.clone(),
        source,
    })?;

    let listener = TcpListener::bind(addr).map_err(|source| ServerError::Bind { addr, source })?;
    listener.set_nonblocking(true)?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!("Server is running on port {}", addr.port());

    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
