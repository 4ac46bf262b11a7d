//! # Fortune Teller
//!
//! A joke "AI face reading" service built with Axum: upload a photo, get back
//! a randomly chosen fortune. The photo is never analysed; it is validated,
//! written to temporary storage, and deleted again.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Fortune catalog, upload entities, storage trait
//! - **Application Layer** ([`application`]) - Fortune drawing and upload handling
//! - **Infrastructure Layer** ([`infrastructure`]) - Filesystem and no-op upload stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Client** ([`client`]) - HTTP client and result renderer used by the `fortune` CLI
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service on :3001
//! cargo run
//!
//! # Ask for a fortune
//! cargo run --bin fortune -- upload ./selfie.jpg
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FortuneService, UploadService};
    pub use crate::domain::catalog::Catalog;
    pub use crate::domain::entities::{Fortune, ImageUpload, StoredUpload};
    pub use crate::error::{AppError, ErrorExposure};
    pub use crate::state::AppState;
}
