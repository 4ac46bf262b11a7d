//! Shared application state injected into handlers.

use crate::application::services::{FortuneService, UploadService};
use crate::error::ErrorExposure;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub fortune_service: Arc<FortuneService>,
    pub upload_service: Arc<UploadService>,
    pub error_exposure: ErrorExposure,
}

impl AppState {
    pub fn new(
        fortune_service: Arc<FortuneService>,
        upload_service: Arc<UploadService>,
        error_exposure: ErrorExposure,
    ) -> Self {
        Self {
            fortune_service,
            upload_service,
            error_exposure,
        }
    }
}
