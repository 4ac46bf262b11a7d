//! Image MIME type detection from file extensions.

use mime_guess::{Mime, mime};
use std::path::Path;

/// Guesses an `image/*` MIME type from the file extension.
///
/// Returns `None` for anything not recognised as an image.
pub fn image_mime(path: &Path) -> Option<Mime> {
    mime_guess::from_path(path)
        .iter()
        .find(|m| m.type_() == mime::IMAGE)
}
