//! HTTP client for the fortune API.

use mime_guess::Mime;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::api::dto::upload::PHOTO_FIELD;
use crate::client::mime::image_mime;
use crate::client::render::PartialFortune;

/// Upload requests are abandoned after this long.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Client-side failures; `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("找不到文件: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("请选择图片文件")]
    NotAnImage,

    #[error("文件大小不能超过{limit_mb}MB")]
    TooLarge { limit_mb: u64 },

    #[error("文件读取失败")]
    Read(#[source] std::io::Error),

    #[error("上传接口不存在，请检查API配置")]
    EndpointMissing,

    /// The server refused the upload; carries its error text.
    #[error("{0}")]
    Rejected(String),

    #[error("上传失败 ({0})")]
    Server(StatusCode),

    #[error("上传超时，请重试")]
    Timeout,

    #[error("无法连接到服务器，请检查网络连接")]
    Unreachable,

    #[error("上传失败，请稍后重试")]
    Http(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_connect() {
            ClientError::Unreachable
        } else {
            ClientError::Http(e)
        }
    }
}

/// Body of any `/api/upload` response, success or failure.
#[derive(Debug, Default, Deserialize)]
struct UploadReply {
    filename: Option<String>,
    result: Option<PartialFortune>,
    error: Option<String>,
}

/// A successful upload.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub filename: Option<String>,
    pub result: PartialFortune,
}

/// Body of `/api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReply {
    pub status: String,
    pub timestamp: String,
}

/// Thin client over the fortune HTTP API.
pub struct FortuneClient {
    http: reqwest::Client,
    base_url: String,
    max_size_mb: u64,
}

impl FortuneClient {
    /// Creates a client for the API rooted at `base_url` (e.g. `http://localhost:3001/api`).
    ///
    /// Files larger than `max_size_mb` are rejected before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, max_size_mb: u64) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(UPLOAD_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_size_mb,
        })
    }

    /// Checks that `path` is an image within the size limit.
    ///
    /// Returns the guessed MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::FileMissing`], [`ClientError::NotAnImage`] or
    /// [`ClientError::TooLarge`].
    pub async fn check_file(&self, path: &Path) -> Result<Mime, ClientError> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|_| ClientError::FileMissing(path.to_path_buf()))?;

        if !meta.is_file() {
            return Err(ClientError::FileMissing(path.to_path_buf()));
        }

        let mime = image_mime(path).ok_or(ClientError::NotAnImage)?;

        if meta.len() > self.max_size_mb * BYTES_PER_MB {
            return Err(ClientError::TooLarge {
                limit_mb: self.max_size_mb,
            });
        }

        Ok(mime)
    }

    /// Uploads a photo and returns the fortune the server drew for it.
    ///
    /// # Errors
    ///
    /// Returns a local validation error (see [`FortuneClient::check_file`]),
    /// [`ClientError::EndpointMissing`] on `404`, [`ClientError::Rejected`]
    /// with the server's message on other failures, or a transport error.
    pub async fn upload(&self, path: &Path) -> Result<UploadOutcome, ClientError> {
        let mime = self.check_file(path).await?;
        let bytes = tokio::fs::read(path).await.map_err(ClientError::Read)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());

        tracing::debug!(file = %file_name, size = bytes.len(), mime = %mime, "Uploading photo");

        let part = Part::bytes(bytes).file_name(file_name).mime_str(mime.essence_str())?;
        let form = Form::new().part(PHOTO_FIELD, part);

        let response = self
            .http
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let reply: UploadReply = serde_json::from_str(&body).unwrap_or_default();

        match (status, reply) {
            (StatusCode::OK, UploadReply {
                filename,
                result: Some(result),
                ..
            }) => Ok(UploadOutcome { filename, result }),
            (StatusCode::NOT_FOUND, _) => Err(ClientError::EndpointMissing),
            (status, UploadReply { error: Some(e), .. }) if !e.is_empty() => {
                tracing::debug!(%status, error = %e, "Upload rejected");
                Err(ClientError::Rejected(e))
            }
            (status, _) if status.is_server_error() => Err(ClientError::Server(status)),
            _ => Err(ClientError::Rejected("分析失败".to_string())),
        }
    }

    /// Fetches `/health`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Server`] on a non-success status or a transport error.
    pub async fn health(&self) -> Result<HealthReply, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Server(status));
        }

        Ok(response.json().await?)
    }
}
