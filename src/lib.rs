//! # Scene Pad
//!
//! Rewrites a storybook's scene images at one uniform size. Each of
//! `scene-01.png` through `scene-10.png` is scaled to fit the target box
//! (aspect ratio preserved, never cropped), centered on a solid background
//! canvas, and saved back over the original as an optimized PNG.
//!
//! ```text
//! scene-01.png  1000x1000  →  1180x800  (800x800 content at x=190)
//! scene-02.png   100x50    →  1180x800  (1180x590 content at y=105)
//! scene-05.png  missing    →  reported, skipped
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Layout math, Lanczos3 resize, alpha-aware padding, PNG encoding |
//! | [`process`] | The scene loop: in-order, in-place, skip missing files |
//! | [`naming`] | `scene-NN.png` filename convention |
//! | [`config`] | Target size and background color, optional `config.toml` overlay |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Floor, Not Round
//!
//! The resized content size is `floor(original * scale)` and the offsets are
//! floor-halved. On the constrained axis the content can therefore be one
//! pixel short of the canvas, with the extra pixel of padding landing on the
//! right or bottom edge. Output dimensions are still always exactly the target.
//!
//! ## Decode Before Write
//!
//! Scenes are rewritten in place. The source is fully decoded and the new PNG
//! fully encoded in memory before the file is opened for writing, so a corrupt
//! or unsupported input aborts the run with the original bytes intact.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
