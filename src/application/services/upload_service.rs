//! Photo upload handling service.

use crate::domain::entities::{ImageUpload, StoredUpload};
use crate::domain::repositories::{StorageError, UploadStore};
use crate::error::AppError;
use crate::utils::filename::stored_name;
use std::sync::Arc;
use thiserror::Error;

const BYTES_PER_MB: usize = 1024 * 1024;

/// Failure modes of [`UploadService::accept`].
#[derive(Debug, Error)]
pub enum UploadError {
    /// The upload failed validation; safe to show to the client as-is.
    #[error(transparent)]
    Rejected(AppError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Service validating uploaded photos and cycling them through temporary storage.
///
/// Every accepted file is written to the store and then removed again
/// before the request completes. Removal is best-effort: failures are
/// logged and never surfaced to the caller.
pub struct UploadService {
    store: Arc<dyn UploadStore>,
    limit_mb: u64,
}

impl UploadService {
    /// Creates a new upload service with a size limit in megabytes.
    pub fn new(store: Arc<dyn UploadStore>, limit_mb: u64) -> Self {
        Self { store, limit_mb }
    }

    pub fn limit_mb(&self) -> u64 {
        self.limit_mb
    }

    /// Maximum accepted file size in bytes.
    pub fn limit_bytes(&self) -> usize {
        self.limit_mb as usize * BYTES_PER_MB
    }

    /// Validates an upload.
    ///
    /// # Rules
    ///
    /// Checked in this order:
    /// 1. At least one byte was received
    /// 2. Declared content type starts with `image/`
    /// 3. Size does not exceed [`UploadService::limit_bytes`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] naming the first rule violated.
    pub fn validate(&self, upload: &ImageUpload) -> Result<(), AppError> {
        if upload.size == 0 {
            return Err(AppError::no_file());
        }

        if !upload.is_image() {
            return Err(AppError::not_an_image());
        }

        if upload.size > self.limit_bytes() {
            return Err(AppError::file_too_large(self.limit_mb));
        }

        Ok(())
    }

    /// Validates, stores, and immediately discards an upload.
    ///
    /// Returns the stored record, whose name is echoed to the client.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Rejected`] if validation fails.
    /// Returns [`UploadError::Storage`] if the file cannot be written.
    pub async fn accept(&self, upload: ImageUpload) -> Result<StoredUpload, UploadError> {
        self.validate(&upload).map_err(UploadError::Rejected)?;

        let name = stored_name(upload.original_name.as_deref(), &mut rand::rng());
        let stored = self.store.save(&name, &upload.bytes).await?;

        tracing::debug!(name = %stored.name, size = stored.size, "Upload stored");

        self.discard(&stored).await;

        Ok(stored)
    }

    async fn discard(&self, stored: &StoredUpload) {
        if let Err(e) = self.store.remove(stored).await {
            tracing::warn!(error = %e, "Failed to delete uploaded file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUploadStore;

    fn png(bytes: Vec<u8>) -> ImageUpload {
        ImageUpload::new(
            Some("face.PNG".to_string()),
            Some("image/png".to_string()),
            bytes,
        )
    }

    fn stored_ok(name: &str, bytes: &[u8]) -> Result<StoredUpload, StorageError> {
        Ok(StoredUpload {
            name: name.to_string(),
            path: None,
            size: bytes.len(),
        })
    }

    #[tokio::test]
    async fn test_accept_saves_then_removes() {
        let mut mock_store = MockUploadStore::new();

        mock_store
            .expect_save()
            .withf(|name, bytes| name.ends_with(".png") && bytes == [1, 2, 3])
            .times(1)
            .returning(|name, bytes| stored_ok(name, bytes));
        mock_store.expect_remove().times(1).returning(|_| Ok(()));

        let service = UploadService::new(Arc::new(mock_store), 1);
        let stored = service.accept(png(vec![1, 2, 3])).await.unwrap();

        assert!(stored.name.ends_with(".png"));
        assert_eq!(stored.size, 3);
    }

    #[tokio::test]
    async fn test_remove_failure_is_swallowed() {
        let mut mock_store = MockUploadStore::new();

        mock_store
            .expect_save()
            .times(1)
            .returning(|name, bytes| stored_ok(name, bytes));
        mock_store.expect_remove().times(1).returning(|upload| {
            Err(StorageError::Remove {
                name: upload.name.clone(),
                source: std::io::Error::other("busy"),
            })
        });

        let service = UploadService::new(Arc::new(mock_store), 1);

        assert!(service.accept(png(vec![9])).await.is_ok());
    }

    #[tokio::test]
    async fn test_save_failure_is_storage_error() {
        let mut mock_store = MockUploadStore::new();

        mock_store.expect_save().times(1).returning(|name, _| {
            Err(StorageError::Write {
                name: name.to_string(),
                source: std::io::Error::other("read-only filesystem"),
            })
        });
        mock_store.expect_remove().times(0);

        let service = UploadService::new(Arc::new(mock_store), 1);
        let err = service.accept(png(vec![9])).await.unwrap_err();

        assert!(matches!(err, UploadError::Storage(StorageError::Write { .. })));
    }

    #[tokio::test]
    async fn test_rejected_upload_never_touches_store() {
        let mut mock_store = MockUploadStore::new();
        mock_store.expect_save().times(0);
        mock_store.expect_remove().times(0);

        let service = UploadService::new(Arc::new(mock_store), 1);
        let text = ImageUpload::new(None, Some("text/plain".to_string()), vec![1]);

        let err = service.accept(text).await.unwrap_err();
        assert!(matches!(err, UploadError::Rejected(AppError::BadRequest { .. })));
    }

    #[test]
    fn test_validation_order() {
        let service = UploadService::new(Arc::new(MockUploadStore::new()), 1);

        let empty_text = ImageUpload::new(None, Some("text/plain".to_string()), vec![]);
        assert_eq!(
            service.validate(&empty_text).unwrap_err().to_string(),
            "没有上传文件"
        );

        let big_text = ImageUpload::oversized(None, Some("text/plain".to_string()), 5 * BYTES_PER_MB);
        assert!(service.validate(&big_text).unwrap_err().to_string().contains("图片"));

        let big_png = ImageUpload::oversized(None, Some("image/png".to_string()), BYTES_PER_MB + 1);
        assert_eq!(
            service.validate(&big_png).unwrap_err().to_string(),
            "文件大小不能超过1MB"
        );

        let exact = png(vec![0; BYTES_PER_MB]);
        assert!(service.validate(&exact).is_ok());
    }
}
