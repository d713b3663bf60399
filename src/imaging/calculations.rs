//! Pure calculation functions for the padded layout.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::Dimensions;

/// Where and how large the resized source lands on the target canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadLayout {
    /// Uniform scale factor applied to both axes.
    pub scale: f64,
    /// Resized source width (floor-truncated).
    pub width: u32,
    /// Resized source height (floor-truncated).
    pub height: u32,
    /// Left offset on the canvas.
    pub x: u32,
    /// Top offset on the canvas.
    pub y: u32,
}

/// Calculate the fit-within layout for a source centered on a target canvas.
///
/// The scale is the largest factor that keeps the whole source inside the
/// target box: `min(target_w / src_w, target_h / src_h)`. Resized dimensions
/// are truncated, not rounded, so the constrained edge may end up 1px short
/// of the target. Offsets are floor-halved, so an odd remainder goes to the
/// right/bottom padding.
///
/// Returns `None` when the source has a zero dimension or when truncation
/// collapses one axis to zero.
///
/// # Examples
/// ```
/// # use scene_pad::imaging::{Dimensions, calculate_pad_layout};
/// // Square source into a landscape box: height constrains
/// let layout = calculate_pad_layout(
///     Dimensions { width: 1000, height: 1000 },
///     Dimensions { width: 1180, height: 800 },
/// )
/// .unwrap();
/// assert_eq!((layout.width, layout.height), (800, 800));
/// assert_eq!((layout.x, layout.y), (190, 0));
/// ```
pub fn calculate_pad_layout(source: Dimensions, target: Dimensions) -> Option<PadLayout> {
    if source.width == 0 || source.height == 0 {
        return None;
    }

    let scale_x = target.width as f64 / source.width as f64;
    let scale_y = target.height as f64 / source.height as f64;
    let scale = scale_x.min(scale_y);

    let width = (source.width as f64 * scale).floor() as u32;
    let height = (source.height as f64 * scale).floor() as u32;
    if width == 0 || height == 0 {
        return None;
    }

    Some(PadLayout {
        scale,
        width,
        height,
        x: (target.width - width) / 2,
        y: (target.height - height) / 2,
    })
}
