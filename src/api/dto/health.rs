//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub version: String,
}
