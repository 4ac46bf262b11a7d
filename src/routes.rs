//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*`        - REST API (public)
//! - `OPTIONS *`     - Empty `200` with CORS headers
//! - anything else   - `404` JSON error
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origin mirroring and preflight answers
//! - **Panic recovery** - Handler panics become JSON `500`s

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{cors, panic, tracing};
use crate::state::AppState;
use axum::{Router, middleware};

/// Slack on top of the file limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Constructs the application router with all routes and middleware.
///
/// The upload body limit is derived from the state's
/// [`UploadService`](crate::application::services::UploadService) limit.
pub fn app_router(state: AppState) -> Router {
    let body_limit = state.upload_service.limit_bytes() + MULTIPART_OVERHEAD;

    Router::new()
        .merge(api::routes::routes(body_limit))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(panic::layer())
        .layer(middleware::from_fn(cors::answer_options))
        .layer(cors::layer())
        .layer(tracing::layer())
}
