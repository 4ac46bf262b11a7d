//! Handler for health check endpoint.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::HealthResponse;

/// Returns service liveness with the current server time.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// The service has no external dependencies, so it is healthy whenever it
/// can answer.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2025-04-01T08:00:00.000Z",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
