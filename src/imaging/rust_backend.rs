//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `ImageReader::into_dimensions` (header only) |
//! | Decode | `image::ImageReader` with content sniffing |
//! | Resize | `fast_image_resize` convolution with `Lanczos3` (alpha-aware for RGBA) |
//! | Composite | `image::imageops::replace` (opaque) or per-pixel alpha blend |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (best compression, adaptive filter) |

use super::backend::{BackendError, ImageBackend};
use super::calculations::calculate_pad_layout;
use super::params::{Background, Dimensions, PadParams};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops;
use image::{
    DynamicImage, ExtendedColorType, ImageBuffer, ImageEncoder, ImageError, ImageReader, Pixel,
    RgbImage, RgbaImage,
};
use std::path::Path;
use tracing::{debug, info};

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, err: impl std::fmt::Display) -> BackendError {
    BackendError::Decode {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Load and decode an image from disk.
///
/// The format is sniffed from the file contents, so a mislabeled file still
/// decodes and a non-image file fails as a decode error.
pub fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| decode_error(path, e))
}

/// Resize `img` to fit inside `target` and center it on a `background` canvas.
///
/// The scale is uniform and never crops. Sources with an alpha channel are
/// blended onto the background using alpha as the mask; opaque sources
/// overwrite the covered region. The result is always opaque RGB of exactly
/// `target` size.
pub fn resize_with_padding(
    img: &DynamicImage,
    target: Dimensions,
    background: Background,
) -> Result<RgbImage, BackendError> {
    let original = Dimensions {
        width: img.width(),
        height: img.height(),
    };
    if original.width == 0 || original.height == 0 {
        return Err(BackendError::EmptyImage(original));
    }
    let layout = calculate_pad_layout(original, target)
        .ok_or(BackendError::DegenerateLayout { original, target })?;

    debug!(
        "{} -> {}x{} (scale {:.4}) at ({}, {}) on {}",
        original, layout.width, layout.height, layout.scale, layout.x, layout.y, target
    );

    let mut canvas = RgbImage::from_pixel(target.width, target.height, background.into());

    if img.color().has_alpha() {
        let resized =
            resize_lanczos3(img.to_rgba8(), layout.width, layout.height, PixelType::U8x4)?;
        paste_with_alpha(&mut canvas, &resized, layout.x, layout.y);
    } else {
        let resized = resize_lanczos3(img.to_rgb8(), layout.width, layout.height, PixelType::U8x3)?;
        imageops::replace(&mut canvas, &resized, layout.x as i64, layout.y as i64);
    }

    Ok(canvas)
}

/// Lanczos3 resample to exactly `width` x `height`.
///
/// For `U8x4` the resizer multiplies colour by alpha before convolving and
/// divides it back out afterwards, so the colour of transparent pixels does
/// not bleed into visible neighbours. Same-size input is returned untouched.
fn resize_lanczos3<P>(
    img: ImageBuffer<P, Vec<u8>>,
    width: u32,
    height: u32,
    pixel_type: PixelType,
) -> Result<ImageBuffer<P, Vec<u8>>, BackendError>
where
    P: Pixel<Subpixel = u8>,
{
    let (src_width, src_height) = img.dimensions();
    if (src_width, src_height) == (width, height) {
        return Ok(img);
    }

    let src = Image::from_vec_u8(src_width, src_height, img.into_raw(), pixel_type)
        .map_err(|e| BackendError::Resize(e.to_string()))?;
    let mut dst = Image::new(width, height, pixel_type);
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    Resizer::new()
        .resize(&src, &mut dst, &options)
        .map_err(|e| BackendError::Resize(e.to_string()))?;

    ImageBuffer::from_raw(width, height, dst.into_vec())
        .ok_or_else(|| BackendError::Resize("resized buffer has the wrong length".to_string()))
}

/// Blend one 8-bit channel: `dst * (255 - a) + src * a`, divided by 255 with rounding.
#[inline]
fn blend_channel(dst: u8, src: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    let t = dst as u32 * (255 - a) + src as u32 * a + 128;
    ((t + (t >> 8)) >> 8) as u8
}

/// Paste `src` onto `canvas` at `(x, y)`, using the source alpha as the mask.
fn paste_with_alpha(canvas: &mut RgbImage, src: &RgbaImage, x: u32, y: u32) {
    for (sx, sy, px) in src.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        let dst = canvas.get_pixel_mut(x + sx, y + sy);
        dst.0 = [
            blend_channel(dst[0], r, a),
            blend_channel(dst[1], g, a),
            blend_channel(dst[2], b, a),
        ];
    }
}

/// Encode an RGB canvas as PNG with maximum lossless compression.
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| decode_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn pad(&self, params: &PadParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let canvas = resize_with_padding(&img, params.target, params.background)?;

        // The output file is only opened once encoding has succeeded
        let bytes = encode_png(&canvas).map_err(|e| BackendError::Encode {
            path: params.output.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!("encoded {} bytes for {}", bytes.len(), params.output.display());

        std::fs::write(&params.output, bytes)?;
        info!("padded {} -> {}", params.source.display(), params.output.display());
        Ok(())
    }
}
