//! Client side of the fortune API.
//!
//! - [`api_client`] - Uploads photos and fetches health over HTTP
//! - [`render`] - Turns a (possibly incomplete) result into display text
//! - [`mime`] - Image type detection for local files

pub mod api_client;
pub mod mime;
pub mod render;

pub use api_client::{ClientError, FortuneClient, HealthReply, UploadOutcome};
pub use render::{FortuneView, PartialFortune};
