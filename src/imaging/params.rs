//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! and the [`backend`](super::backend), which does the actual pixel work.
//!
//! ## Types
//!
//! - [`Dimensions`] — Width and height in pixels.
//! - [`Background`] — Opaque RGB fill color for the canvas.
//! - [`PadParams`] — Full specification for a pad: source, output path, target size, background.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Canvas fill color as an RGB triple.
///
/// Read from config as a three-element array, e.g. `[253, 242, 245]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Background(pub [u8; 3]);

impl Background {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Soft pink (`#fdf2f5`).
    pub const fn soft_pink() -> Self {
        Self::rgb(253, 242, 245)
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::soft_pink()
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "({r}, {g}, {b})")
    }
}

impl From<Background> for image::Rgb<u8> {
    fn from(bg: Background) -> Self {
        image::Rgb(bg.0)
    }
}

/// Parameters for a resize-and-pad operation.
///
/// `output` may equal `source` for an in-place rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct PadParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub target: Dimensions,
    pub background: Background,
}
