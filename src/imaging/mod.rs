//! Image processing, pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Resize** | Lanczos3 via `fast_image_resize` |
//! | **Pad** | background canvas + centered paste (alpha-masked when needed) |
//! | **Encode** | PNG, best compression |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for layout math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{PadLayout, calculate_pad_layout};
pub use operations::{get_dimensions, pad_in_place};
pub use params::{Background, Dimensions, PadParams};
pub use rust_backend::{RustBackend, resize_with_padding};
