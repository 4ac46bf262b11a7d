//! Stored filename generation.

use chrono::Utc;
use rand::Rng;
use std::path::Path;

/// Upper bound (exclusive) of the random suffix.
const SUFFIX_RANGE: u32 = 1_000_000_000;

/// Generates a collision-resistant name for an uploaded file.
///
/// The name has the form `<unix-millis>-<random><ext>`, where `<ext>` is the
/// lowercased extension of `original_name` including its dot. Names without
/// an extension produce no suffix.
///
/// # Examples
///
/// ```ignore
/// let name = stored_name(Some("Selfie.JPG"), &mut rand::rng());
/// assert!(name.ends_with(".jpg"));
/// ```
pub fn stored_name<R: Rng + ?Sized>(original_name: Option<&str>, rng: &mut R) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = rng.random_range(0..SUFFIX_RANGE);

    format!("{millis}-{suffix}{}", extension(original_name))
}

/// Extracts a sanitized extension (with leading dot) from a client filename.
///
/// Only ASCII alphanumeric extensions are kept so the stored name can never
/// escape the upload directory.
fn extension(original_name: Option<&str>) -> String {
    original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}
