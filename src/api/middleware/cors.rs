//! Cross-origin request handling.

use axum::{
    extract::Request,
    http::{HeaderName, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// How long browsers may cache a preflight result.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Creates the CORS layer.
///
/// The request's `Origin` is mirrored back, so any browser origin may call
/// the API with credentials.
///
/// # Headers
///
/// - Allowed methods: `GET, POST, OPTIONS`
/// - Allowed headers: `Content-Type, Authorization, X-Requested-With`
/// - Exposed headers: `Content-Length, Content-Type`
/// - Max age: 24 hours
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers([header::CONTENT_LENGTH, header::CONTENT_TYPE])
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Answers every `OPTIONS` request with an empty `200 OK`.
///
/// [`CorsLayer`] only short-circuits proper preflights (those carrying
/// `Access-Control-Request-Method`); this covers bare `OPTIONS` probes on
/// any path. Must run inside [`layer`] so CORS headers are still applied.
pub async fn answer_options(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    next.run(req).await
}
