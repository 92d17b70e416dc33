//! Image acquisition errors.

use std::path::PathBuf;

/// Errors that can occur while fetching or decoding a source image.
#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read image file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Decoded image is unusable: {0}")]
    Raster(#[from] crate::error::PreconditionError),

    #[error("Image is too large to convert ({width}x{height}, limit {max_pixels} pixels)")]
    TooLarge {
        width: u32,
        height: u32,
        max_pixels: u64,
    },

    #[error("Failed to load {url} after {attempts} attempts (last error: {last})")]
    Exhausted {
        url: String,
        attempts: u32,
        last: String,
    },
}
