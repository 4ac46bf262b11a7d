//! Handler for photo upload endpoint.

use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::{HeaderMap, HeaderName, StatusCode, header},
};

use crate::api::dto::upload::{PHOTO_FIELD, UPLOAD_SUCCESS_MESSAGE, UploadResponse};
use crate::application::services::UploadError;
use crate::domain::entities::ImageUpload;
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a photo and answers with a random fortune.
///
/// # Endpoint
///
/// `POST /api/upload` (multipart, file in field `photo`)
///
/// # Request Flow
///
/// 1. Locate the `photo` field, skipping any others
/// 2. Stream it into memory, discarding the payload once it exceeds the limit
/// 3. Validate, store, and delete the file via [`crate::application::services::UploadService`]
/// 4. Draw a fortune from the catalog
///
/// The photo's content plays no part in the fortune drawn.
///
/// # Response
///
/// ```json
/// {
///   "message": "文件上传成功",
///   "filename": "1711929600000-123456789.jpg",
///   "result": { "overall": "...", "career": "...", "love": "...", "wealth": "...", "health": "..." }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if:
/// - the body is not valid multipart
/// - no `photo` file was sent
/// - the file is not an image
/// - the file exceeds the upload limit
///
/// Returns 500 Internal Server Error if the file cannot be stored.
pub async fn upload_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    tracing::info!(
        origin = header_value(&headers, &header::ORIGIN),
        content_type = header_value(&headers, &header::CONTENT_TYPE),
        "Upload request received"
    );

    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected non-multipart upload");
        AppError::bad_request(rejection.body_text())
    })?;

    let limit_mb = state.upload_service.limit_mb();
    let upload = read_photo(&mut multipart, state.upload_service.limit_bytes())
        .await
        .map_err(|e| multipart_error(e, limit_mb))?
        .ok_or_else(AppError::no_file)?;

    let stored = state
        .upload_service
        .accept(upload)
        .await
        .map_err(|e| match e {
            UploadError::Rejected(err) => err,
            UploadError::Storage(err) => state.error_exposure.internal(err),
        })?;

    let (index, fortune) = state.fortune_service.draw();

    tracing::info!(
        filename = %stored.name,
        size = stored.size,
        fortune = index,
        "Upload accepted"
    );

    Ok(Json(UploadResponse {
        message: UPLOAD_SUCCESS_MESSAGE.to_string(),
        filename: stored.name,
        result: fortune,
    }))
}

/// Reads the first `photo` field from the form.
///
/// Stops buffering as soon as more than `limit` bytes have arrived and
/// returns an [`ImageUpload::oversized`] record instead of the payload.
/// Returns `None` if the form has no `photo` field.
async fn read_photo(
    multipart: &mut Multipart,
    limit: usize,
) -> Result<Option<ImageUpload>, MultipartError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }

        let original_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        let mut bytes = Vec::new();
        let mut received = 0usize;

        while let Some(chunk) = field.chunk().await? {
            received += chunk.len();
            if received > limit {
                bytes = Vec::new();
            } else {
                bytes.extend_from_slice(&chunk);
            }
        }
        drop(field);

        if received > limit {
            drain(multipart).await?;
            return Ok(Some(ImageUpload::oversized(
                original_name,
                content_type,
                received,
            )));
        }

        return Ok(Some(ImageUpload::new(original_name, content_type, bytes)));
    }

    Ok(None)
}

/// Discards any fields left after an oversized photo.
///
/// Answering before the client has finished sending can reset the
/// connection and lose the error response. The route's body limit bounds
/// how much is read.
async fn drain(multipart: &mut Multipart) -> Result<(), MultipartError> {
    while let Some(mut field) = multipart.next_field().await? {
        while field.chunk().await?.is_some() {}
    }
    Ok(())
}

/// Maps multipart stream failures to client errors.
///
/// Hitting the request body limit is reported the same way as an
/// oversized file.
fn multipart_error(err: MultipartError, limit_mb: u64) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::file_too_large(limit_mb);
    }

    tracing::debug!(error = %err, "Malformed multipart body");
    AppError::bad_request(err.body_text())
}

fn header_value<'a>(headers: &'a HeaderMap, name: &HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
}
