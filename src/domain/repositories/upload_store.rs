//! Storage trait for uploaded photos.

use crate::domain::entities::StoredUpload;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by upload stores.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write upload {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove upload {name}: {source}")]
    Remove {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Temporary storage for uploaded photos.
///
/// Files only live for the duration of one request: the upload service
/// saves them and removes them again before responding.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FsUploadStore`] - Writes into a local directory
/// - [`crate::infrastructure::storage::NullUploadStore`] - Keeps nothing
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Persists `bytes` under the generated `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the file cannot be written.
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<StoredUpload, StorageError>;

    /// Deletes a previously saved upload.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Remove`] if the file cannot be deleted.
    async fn remove(&self, upload: &StoredUpload) -> Result<(), StorageError>;
}
