#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use fortune_teller::application::services::{FortuneService, UploadService};
use fortune_teller::domain::catalog::Catalog;
use fortune_teller::domain::entities::{Fortune, StoredUpload};
use fortune_teller::domain::repositories::{StorageError, UploadStore};
use fortune_teller::error::ErrorExposure;
use fortune_teller::infrastructure::storage::NullUploadStore;
use fortune_teller::state::AppState;
use std::sync::Arc;

pub const MB: usize = 1024 * 1024;

/// State backed by a no-op store, a 1MB limit, and detailed errors.
pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(NullUploadStore::new()), 1, ErrorExposure::Detailed)
}

pub fn create_state_with(
    store: Arc<dyn UploadStore>,
    limit_mb: u64,
    exposure: ErrorExposure,
) -> AppState {
    AppState::new(
        Arc::new(FortuneService::new(Catalog::default())),
        Arc::new(UploadService::new(store, limit_mb)),
        exposure,
    )
}

/// Store whose operations can be made to fail.
pub struct FailingStore {
    pub fail_save: bool,
    pub fail_remove: bool,
}

#[async_trait]
impl UploadStore for FailingStore {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<StoredUpload, StorageError> {
        if self.fail_save {
            return Err(StorageError::Write {
                name: name.to_string(),
                source: std::io::Error::other("disk quota exceeded"),
            });
        }
        Ok(StoredUpload {
            name: name.to_string(),
            path: None,
            size: bytes.len(),
        })
    }

    async fn remove(&self, upload: &StoredUpload) -> Result<(), StorageError> {
        if self.fail_remove {
            return Err(StorageError::Remove {
                name: upload.name.clone(),
                source: std::io::Error::other("file locked"),
            });
        }
        Ok(())
    }
}

pub fn image_part(bytes: Vec<u8>, file_name: &str, mime: &str) -> Part {
    Part::bytes(bytes).file_name(file_name).mime_type(mime)
}

pub fn photo_form(bytes: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part("photo", image_part(bytes, "selfie.png", "image/png"))
}

/// Parses `value` as a Fortune and checks it is a default catalog entry.
pub fn assert_catalog_member(value: &serde_json::Value) {
    let fortune: Fortune = serde_json::from_value(value.clone()).unwrap();
    assert!(
        Catalog::default().contains(&fortune),
        "fortune not in catalog: {fortune:?}"
    );
}
