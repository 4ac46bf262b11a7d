//! Storage trait definitions.
//!
//! Traits here are implemented by the infrastructure layer.

pub mod upload_store;

pub use upload_store::{StorageError, UploadStore};

#[cfg(test)]
pub use upload_store::MockUploadStore;
