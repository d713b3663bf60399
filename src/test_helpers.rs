//! Shared test utilities: synthetic images and scene directories.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = setup_scene_dir(&[(1, 1000, 1000), (2, 100, 50)]);
//! let img = image::open(tmp.path().join("scene-01.png")).unwrap();
//! assert_eq!(img.width(), 1000);
//! ```

use image::{DynamicImage, RgbImage, RgbaImage};
use std::path::Path;
use tempfile::TempDir;

use crate::naming::scene_filename;

/// A single-color RGB image.
pub fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, image::Rgb(color))
}

/// A single-color RGBA image.
pub fn solid_rgba(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba(color))
}

/// Write an image as PNG.
pub fn write_png(path: &Path, img: &DynamicImage) {
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Create a temp directory holding `scene-NN.png` files.
///
/// Each entry is `(index, width, height)`; pixels are a gradient so the
/// resample has something to chew on.
pub fn setup_scene_dir(scenes: &[(u32, u32, u32)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for &(index, width, height) in scenes {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        write_png(
            &tmp.path().join(scene_filename(index)),
            &DynamicImage::ImageRgb8(img),
        );
    }
    tmp
}
