//! Uploaded photo entities.

use std::path::PathBuf;

/// A file received from a multipart upload, held in memory until it is stored.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Filename supplied by the client, if any. Only its extension is used.
    pub original_name: Option<String>,
    /// Declared content type of the multipart field.
    pub content_type: Option<String>,
    /// Payload; empty when the upload was cut off for exceeding the limit.
    pub bytes: Vec<u8>,
    /// Number of bytes received, which may exceed `bytes.len()` if cut off.
    pub size: usize,
}

impl ImageUpload {
    /// Creates a new ImageUpload instance.
    pub fn new(original_name: Option<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len();
        Self {
            original_name,
            content_type,
            bytes,
            size,
        }
    }

    /// Creates a record for an upload whose body was abandoned after
    /// `received` bytes because it crossed the size limit.
    pub fn oversized(
        original_name: Option<String>,
        content_type: Option<String>,
        received: usize,
    ) -> Self {
        Self {
            original_name,
            content_type,
            bytes: Vec::new(),
            size: received,
        }
    }

    /// Returns true if the declared content type is an `image/*` type.
    ///
    /// A missing content type is treated as not an image.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
    }

    /// Returns true if the body was abandoned before it was fully read.
    pub fn is_truncated(&self) -> bool {
        self.size > self.bytes.len()
    }
}

/// A file that has been written to an upload store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Generated file name, echoed back to the client.
    pub name: String,
    /// Location on disk; `None` when the store keeps nothing.
    pub path: Option<PathBuf>,
    pub size: usize,
}
