use axum::Json;
use tracing::debug;

use crate::api::types::HealthResponse;

/// Health check handler
///
/// # Route
///
/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
