//! Data Transfer Objects for API responses.
//!
//! All DTOs use Serde for JSON serialization. Error bodies are produced
//! by [`crate::error::AppError`].

pub mod health;
pub mod info;
pub mod upload;
