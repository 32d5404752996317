//! HTTP route handlers and router assembly.
//!
//! Dispatch is an explicit ordered composition: the exact-path JSON routes
//! match first, anything unmatched falls through to the static file service,
//! and a miss there is a 404.
//!
//! Request tracing wraps the whole router, so every request runs inside a
//! span carrying a unique request_id for log correlation.

pub mod health;
pub mod hello;

use std::time::Duration;

use axum::{extract::Request, response::Response, routing::get, Router};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::http::static_files::create_static_service;

/// Creates the Axum router with the API routes, the static file fallback,
/// and request tracing.
pub fn create_router(config: &AppConfig) -> Router {
    let api_routes = Router::new().route("/api/hello", get(hello::hello));

    // Health check - exact match, never shadowed by a static file
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        // Unmatched paths resolve against the static root
        .fallback_service(create_static_service(&config.static_files))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::info_span!(
                        "request",
                        request_id = %Uuid::new_v4(),
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_response(
                    |response: &Response, latency: Duration, _span: &tracing::Span| {
                        tracing::info!(
                            status = response.status().as_u16(),
                            duration_ms = latency.as_millis() as u64,
                            "Request completed"
                        );
                    },
                ),
        )
}
