//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe used by Kubernetes, ECS, systemd, and load
//! balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Health check handler.
///
/// Always reports healthy. This is a liveness probe: it carries no
/// diagnostic value beyond showing the process is up and routing requests.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
