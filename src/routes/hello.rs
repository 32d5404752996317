//! Fixed JSON greeting endpoint.

use axum::Json;
use serde::Serialize;

/// Response body for `GET /api/hello`.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    message: &'static str,
}

/// Hello handler.
///
/// Returns the fixed greeting unconditionally; nothing in the request is
/// consulted.
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello World",
    })
}
