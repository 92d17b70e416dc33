//! Image acquisition: local files and remote URLs decoded into rasters.
//!
//! Remote imgur links are resolved by guessing the direct image URL, one
//! extension after another, until one of them downloads and decodes.

mod error;
mod loader;
mod retry;
mod source;

pub use error::AcquireError;
pub use loader::{decode_image, AcquireSettings, ImageLoader, DEFAULT_MAX_PIXELS, DEFAULT_TIMEOUT};
pub use retry::{calculate_backoff, DEFAULT_BACKOFF_BASE, DEFAULT_BACKOFF_MAX, DEFAULT_NETWORK_RETRIES};
pub use source::{candidate_urls, ImageSource, EXTENSION_GUESSES, IMGUR_IMAGE_HOST};
