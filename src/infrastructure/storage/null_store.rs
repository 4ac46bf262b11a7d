//! No-op upload store for diskless deployments.

use crate::domain::entities::StoredUpload;
use crate::domain::repositories::{StorageError, UploadStore};
use async_trait::async_trait;
use tracing::debug;

/// An upload store that keeps nothing.
///
/// Used when `UPLOAD_STORAGE=none`, e.g. on serverless hosts without a
/// writable filesystem. Saves succeed immediately and removals are no-ops.
pub struct NullUploadStore;

impl NullUploadStore {
    /// Creates a new NullUploadStore instance.
    pub fn new() -> Self {
        debug!("Using NullUploadStore (uploads are not written)");
        Self
    }
}

impl Default for NullUploadStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UploadStore for NullUploadStore {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<StoredUpload, StorageError> {
        Ok(StoredUpload {
            name: name.to_string(),
            path: None,
            size: bytes.len(),
        })
    }

    async fn remove(&self, _upload: &StoredUpload) -> Result<(), StorageError> {
        Ok(())
    }
}
