//! DTOs for the photo upload endpoint.

use serde::Serialize;

use crate::domain::entities::Fortune;

/// Multipart field carrying the photo.
pub const PHOTO_FIELD: &str = "photo";

pub const UPLOAD_SUCCESS_MESSAGE: &str = "文件上传成功";

/// Successful upload response.
///
/// ```json
/// {
///   "message": "文件上传成功",
///   "filename": "1711929600000-123456789.jpg",
///   "result": {
///     "overall": "...",
///     "career": "...",
///     "love": "...",
///     "wealth": "...",
///     "health": "..."
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    /// Name the file was stored under (not the client's original name).
    pub filename: String,
    pub result: Fortune,
}
