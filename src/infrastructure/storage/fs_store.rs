//! Local filesystem upload store.

use crate::domain::entities::StoredUpload;
use crate::domain::repositories::{StorageError, UploadStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes uploads into a single directory on local disk.
pub struct FsUploadStore {
    dir: PathBuf,
}

impl FsUploadStore {
    /// Creates the store, creating `dir` (and parents) if missing.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub async fn create(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        tracing::debug!(dir = %dir.display(), "Upload directory ready");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl UploadStore for FsUploadStore {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<StoredUpload, StorageError> {
        let path = self.dir.join(name);

        fs::write(&path, bytes)
            .await
            .map_err(|source| StorageError::Write {
                name: name.to_string(),
                source,
            })?;

        Ok(StoredUpload {
            name: name.to_string(),
            path: Some(path),
            size: bytes.len(),
        })
    }

    async fn remove(&self, upload: &StoredUpload) -> Result<(), StorageError> {
        let Some(path) = &upload.path else {
            return Ok(());
        };

        fs::remove_file(path)
            .await
            .map_err(|source| StorageError::Remove {
                name: upload.name.clone(),
                source,
            })
    }
}
