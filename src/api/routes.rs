//! API route configuration.

use crate::api::handlers::{api_info_handler, health_handler, upload_handler};
use crate::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET  /api`         - Service banner
/// - `GET  /api/health`  - Liveness with server timestamp
/// - `POST /api/upload`  - Upload a photo, receive a fortune
///
/// `body_limit` caps the raw request body of the upload route in bytes.
pub fn routes(body_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/api", get(api_info_handler))
        .route("/api/health", get(health_handler))
        .route(
            "/api/upload",
            post(upload_handler).layer(DefaultBodyLimit::max(body_limit)),
        )
}
