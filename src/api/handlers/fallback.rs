//! Fallback handler for unmatched routes.

use crate::error::{AppError, NOT_FOUND_MESSAGE};

/// Responds `404` with a JSON error body for any unknown path.
pub async fn not_found_handler() -> AppError {
    AppError::not_found(NOT_FOUND_MESSAGE)
}
