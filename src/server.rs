//! HTTP server initialization and runtime setup.
//!
//! Builds services from configuration and runs the Axum server.

use crate::application::services::{FortuneService, UploadService};
use crate::config::{Config, StorageKind};
use crate::domain::catalog::Catalog;
use crate::domain::repositories::UploadStore;
use crate::infrastructure::storage::{FsUploadStore, NullUploadStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds the shared application state from configuration.
///
/// # Errors
///
/// Returns an error if the upload directory cannot be created.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let store: Arc<dyn UploadStore> = match config.storage {
        StorageKind::Disk => {
            let store = FsUploadStore::create(&config.upload_dir)
                .await
                .with_context(|| {
                    format!(
                        "Failed to create upload directory {}",
                        config.upload_dir.display()
                    )
                })?;
            tracing::info!("Upload storage ready at {}", store.dir().display());
            Arc::new(store)
        }
        StorageKind::Disabled => {
            tracing::info!("Upload storage disabled (NullUploadStore)");
            Arc::new(NullUploadStore::new())
        }
    };

    let catalog = Catalog::default();
    tracing::info!("Fortune catalog loaded with {} entries", catalog.len());

    Ok(AppState::new(
        Arc::new(FortuneService::new(catalog)),
        Arc::new(UploadService::new(store, config.upload_limit_mb)),
        config.environment.error_exposure(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Upload storage (disk directory or no-op)
/// - Fortune catalog
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Upload directory creation fails
/// - Server bind fails (including the port being in use)
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(listen_addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
