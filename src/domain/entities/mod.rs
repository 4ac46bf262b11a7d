//! Domain entities.

pub mod fortune;
pub mod upload;

pub use fortune::Fortune;
pub use upload::{ImageUpload, StoredUpload};
