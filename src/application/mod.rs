//! Application layer services implementing business logic.
//!
//! Services coordinate domain objects and storage traits and give HTTP
//! handlers a small API to call.
//!
//! # Available Services
//!
//! - [`services::fortune_service::FortuneService`] - Random fortune selection
//! - [`services::upload_service::UploadService`] - Upload validation and temporary storage

pub mod services;
