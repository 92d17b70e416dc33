//! Raster module: pixel-addressable RGBA images and the threshold filter.
//!
//! 1. **Raster** - flat RGBA buffer with per-pixel and grayscale access
//! 2. **Binarize** - force every pixel to pure black or pure white

mod binarize;
mod buffer;

pub use binarize::{binarize, Threshold, DEFAULT_THRESHOLD};
pub use buffer::{Pixel, Raster, BYTES_PER_PIXEL};
