//! ImageLoader - fetches and decodes source images.

use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use image::ImageReader;

use super::error::AcquireError;
use super::retry::{
    calculate_backoff, is_transient, DEFAULT_BACKOFF_BASE, DEFAULT_BACKOFF_MAX,
    DEFAULT_NETWORK_RETRIES,
};
use super::source::{candidate_urls, ImageSource, IMGUR_IMAGE_HOST};
use crate::raster::Raster;

/// Default timeout for HTTP requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest image accepted, in pixels (4096 x 4096).
pub const DEFAULT_MAX_PIXELS: u64 = 4096 * 4096;

/// Knobs for image acquisition.
#[derive(Debug, Clone)]
pub struct AcquireSettings {
    /// Host that serves direct imgur image files
    pub image_host: String,
    /// Retries per URL for transient network errors
    pub network_retries: u32,
    pub backoff_base: Duration,
    pub backoff_max: Duration,
    /// Whole-request timeout
    pub timeout: Duration,
    pub max_pixels: u64,
}

impl Default for AcquireSettings {
    fn default() -> Self {
        Self {
            image_host: IMGUR_IMAGE_HOST.to_string(),
            network_retries: DEFAULT_NETWORK_RETRIES,
            backoff_base: DEFAULT_BACKOFF_BASE,
            backoff_max: DEFAULT_BACKOFF_MAX,
            timeout: DEFAULT_TIMEOUT,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

/// Loads source rasters from disk or over HTTP.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    http_client: reqwest::Client,
    settings: AcquireSettings,
}

impl ImageLoader {
    /// Create a loader with its own HTTP client.
    ///
    /// # Errors
    /// Returns `AcquireError::Http` if the HTTP client cannot be built.
    pub fn new(settings: AcquireSettings) -> Result<Self, AcquireError> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()?;
        Ok(Self {
            http_client,
            settings,
        })
    }

    pub fn settings(&self) -> &AcquireSettings {
        &self.settings
    }

    /// Load and decode `source` into an RGBA raster.
    pub async fn load(&self, source: &ImageSource) -> Result<Raster, AcquireError> {
        match source {
            ImageSource::File(path) => self.load_file(path).await,
            ImageSource::Url(url) => self.load_url(url).await,
        }
    }

    /// Read and decode a local image file.
    pub async fn load_file(&self, path: &Path) -> Result<Raster, AcquireError> {
        log::info!("Loading image file: {}", path.display());
        let bytes = tokio::fs::read(path).await.map_err(|e| AcquireError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        decode_image(&bytes, self.settings.max_pixels)
    }

    /// Fetch an image URL, walking the candidate list until one decodes.
    ///
    /// # Errors
    /// Returns `AcquireError::Exhausted` once every candidate failed; the
    /// last failure is kept as its message.
    pub async fn load_url(&self, url: &str) -> Result<Raster, AcquireError> {
        let candidates = candidate_urls(url, &self.settings.image_host);
        let mut attempts = 0;
        let mut last_error = None;

        for candidate in &candidates {
            log::info!("Load: {}", candidate);
            match self.fetch_with_retry(candidate, &mut attempts).await {
                Ok(raster) => {
                    log::info!(
                        "Loaded image: {}x{} from {}",
                        raster.width(),
                        raster.height(),
                        candidate
                    );
                    return Ok(raster);
                }
                Err(e) => {
                    log::warn!("Error: {} -> retry", e);
                    last_error = Some(e);
                }
            }
        }

        Err(AcquireError::Exhausted {
            url: url.to_string(),
            attempts,
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no candidate URLs".to_string()),
        })
    }

    async fn fetch_with_retry(&self, url: &str, attempts: &mut u32) -> Result<Raster, AcquireError> {
        let mut retry = 0;
        loop {
            *attempts += 1;
            match self.fetch(url).await {
                Ok(raster) => return Ok(raster),
                Err(e) if is_transient(&e) && retry < self.settings.network_retries => {
                    let delay = calculate_backoff(
                        retry,
                        self.settings.backoff_base,
                        self.settings.backoff_max,
                    );
                    log::warn!(
                        "Network error (attempt {}/{}): {}. Retrying in {:?}...",
                        retry + 1,
                        self.settings.network_retries + 1,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<Raster, AcquireError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AcquireError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await?;
        decode_image(&bytes, self.settings.max_pixels)
    }
}

/// Decode an encoded image (PNG, JPEG, TIFF, ...) into an RGBA raster.
///
/// The header is read first, so oversized images are rejected before any
/// pixel data is decoded.
///
/// # Errors
/// `AcquireError::Decode` for unreadable data, `AcquireError::TooLarge` when
/// the image has more than `max_pixels` pixels.
pub fn decode_image(bytes: &[u8], max_pixels: u64) -> Result<Raster, AcquireError> {
    let (width, height) = image_reader(bytes)?.into_dimensions()?;
    if width as u64 * height as u64 > max_pixels {
        return Err(AcquireError::TooLarge {
            width,
            height,
            max_pixels,
        });
    }

    let rgba = image_reader(bytes)?.decode()?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Raster::from_rgba(width, height, rgba.into_raw())?)
}

fn image_reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, AcquireError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AcquireError::Decode(e.into()))
}
