//! Threshold filter producing a pure black/white raster.

use super::buffer::Raster;
use crate::error::PreconditionError;

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: u8 = 200;

/// Gray level at or below which a pixel counts as dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Build a threshold from any integer.
    ///
    /// # Errors
    /// Returns `PreconditionError::ThresholdOutOfRange` outside `0..=255`.
    pub fn new(value: i64) -> Result<Self, PreconditionError> {
        u8::try_from(value)
            .map(Threshold)
            .map_err(|_| PreconditionError::ThresholdOutOfRange(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// True when `gray` falls on the dark side of this threshold.
    #[inline]
    pub fn is_dark(&self, gray: u8) -> bool {
        gray <= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold(DEFAULT_THRESHOLD)
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Threshold(value)
    }
}

/// Produce a binary copy of `src`.
///
/// Every pixel whose gray level is `<= threshold` becomes black (0), every
/// other pixel white (255). Output pixels are always opaque.
pub fn binarize(src: &Raster, threshold: Threshold) -> Raster {
    let (width, height) = src.size();
    log::debug!(
        "Binarizing {}x{} raster at threshold {}",
        width,
        height,
        threshold.value()
    );

    let mut dst = Raster::new(width, height);
    for i in 0..width {
        for j in 0..height {
            let v = if threshold.is_dark(src.get_gray(i, j)) {
                0
            } else {
                255
            };
            dst.set_gray(i, j, v);
        }
    }
    dst
}
