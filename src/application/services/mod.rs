//! Business logic services for the application layer.

pub mod fortune_service;
pub mod upload_service;

pub use fortune_service::FortuneService;
pub use upload_service::{UploadError, UploadService};
