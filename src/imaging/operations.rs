//! High-level image operations.
//!
//! These functions combine calculations with backend execution.

use super::backend::{BackendError, ImageBackend};
use super::params::{Background, Dimensions, PadParams};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<Dimensions> {
    backend.identify(path)
}

/// Pad an image in place to `target`, returning its original dimensions.
///
/// The original size is read before the file is rewritten.
pub fn pad_in_place(
    backend: &impl ImageBackend,
    path: &Path,
    target: Dimensions,
    background: Background,
) -> Result<Dimensions> {
    let original = get_dimensions(backend, path)?;
    backend.pad(&PadParams {
        source: path.to_path_buf(),
        output: path.to_path_buf(),
        target,
        background,
    })?;
    Ok(original)
}
