//! HTTP-facing error type and internal error exposure policy.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

/// Message returned for internal failures when details are hidden.
pub const GENERIC_INTERNAL_MESSAGE: &str = "服务器内部错误";
pub const NO_FILE_MESSAGE: &str = "没有上传文件";
pub const NOT_AN_IMAGE_MESSAGE: &str = "只允许上传图片文件！";
pub const NOT_FOUND_MESSAGE: &str = "接口不存在";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The request carried no `photo` file.
    pub fn no_file() -> Self {
        Self::bad_request(NO_FILE_MESSAGE)
    }

    /// The uploaded file's content type is not `image/*`.
    pub fn not_an_image() -> Self {
        Self::bad_request(NOT_AN_IMAGE_MESSAGE)
    }

    /// The uploaded file exceeds the configured limit.
    pub fn file_too_large(limit_mb: u64) -> Self {
        Self::bad_request(format!("文件大小不能超过{limit_mb}MB"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Controls whether internal error details reach the client.
///
/// Derived from the deployment environment: development shows the
/// underlying message, production replaces it with
/// [`GENERIC_INTERNAL_MESSAGE`]. Both variants log the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorExposure {
    Detailed,
    Generic,
}

impl ErrorExposure {
    /// Logs `err` and converts it into an [`AppError::Internal`].
    pub fn internal(self, err: impl Display) -> AppError {
        tracing::error!(error = %err, "Request failed with internal error");

        match self {
            ErrorExposure::Detailed => AppError::internal(err.to_string()),
            ErrorExposure::Generic => AppError::internal(GENERIC_INTERNAL_MESSAGE),
        }
    }
}
