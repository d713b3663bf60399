//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the scene loop
//! needs: identify and pad.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::params::{Dimensions, PadParams};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("Failed to encode {path}: {reason}")]
    Encode { path: String, reason: String },
    #[error("Resample failed: {0}")]
    Resize(String),
    #[error("Image has zero size ({0})")]
    EmptyImage(Dimensions),
    #[error("Resizing {original} into {target} collapses an axis to zero")]
    DegenerateLayout {
        original: Dimensions,
        target: Dimensions,
    },
}

/// Trait for image processing backends.
///
/// Every backend must implement both operations so the scene loop is
/// backend-agnostic.
pub trait ImageBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Resize the source to fit the target box, center it on a background
    /// canvas, and write the result to `params.output`.
    fn pad(&self, params: &PadParams) -> Result<(), BackendError>;
}
