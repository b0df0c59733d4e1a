//! Health check handlers.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Create health routes.
pub fn health_routes() -> Router {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint. The stores are process-local, so there is no
/// external dependency to probe; this reports process liveness only.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
