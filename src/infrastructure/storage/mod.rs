//! Temporary storage for uploaded photos.
//!
//! Provides two [`UploadStore`](crate::domain::repositories::UploadStore) implementations:
//! - [`FsUploadStore`] - Writes files into a local directory
//! - [`NullUploadStore`] - No-op implementation for diskless deployments and tests

mod fs_store;
mod null_store;

pub use fs_store::FsUploadStore;
pub use null_store::NullUploadStore;
