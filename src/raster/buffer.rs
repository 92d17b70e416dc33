//! Fixed-size RGBA raster with pixel and grayscale accessors.

use crate::error::PreconditionError;

/// Number of bytes per pixel (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// A single RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Opaque gray pixel with all color channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self {
            r: v,
            g: v,
            b: v,
            a: 255,
        }
    }

    /// Unweighted mean of the color channels, truncated.
    ///
    /// Alpha does not take part in the average.
    #[inline]
    pub fn luma(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

/// A rectangular grid of RGBA pixels stored row-major in one flat buffer.
///
/// Pixel `(i, j)` lives at byte offset `(j * width + i) * 4`. Indices are
/// the caller's responsibility: out-of-range access panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster with every channel of every pixel set to zero.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Wrap an existing RGBA buffer.
    ///
    /// # Errors
    /// Returns `PreconditionError::BufferSizeMismatch` when `data.len()`
    /// is not `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PreconditionError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(PreconditionError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Raster dimensions as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when the raster has no pixels (zero width or height).
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Borrow the raw RGBA bytes.
    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster, returning the raw RGBA bytes.
    pub fn into_rgba(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, i: u32, j: u32) -> usize {
        assert!(
            i < self.width && j < self.height,
            "pixel ({}, {}) out of bounds for {}x{} raster",
            i,
            j,
            self.width,
            self.height
        );
        (j as usize * self.width as usize + i as usize) * BYTES_PER_PIXEL
    }

    /// Read the pixel at column `i`, row `j`.
    #[inline]
    pub fn get_pixel(&self, i: u32, j: u32) -> Pixel {
        let idx = self.offset(i, j);
        Pixel {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
            a: self.data[idx + 3],
        }
    }

    /// Overwrite all four channels at column `i`, row `j`.
    #[inline]
    pub fn set_pixel(&mut self, i: u32, j: u32, px: Pixel) {
        let idx = self.offset(i, j);
        self.data[idx] = px.r;
        self.data[idx + 1] = px.g;
        self.data[idx + 2] = px.b;
        self.data[idx + 3] = px.a;
    }

    /// Grayscale value of a pixel: `(r + g + b) / 3`, truncated.
    #[inline]
    pub fn get_gray(&self, i: u32, j: u32) -> u8 {
        self.get_pixel(i, j).luma()
    }

    /// Write `(v, v, v, 255)`. The source alpha is discarded.
    #[inline]
    pub fn set_gray(&mut self, i: u32, j: u32, v: u8) {
        self.set_pixel(i, j, Pixel::gray(v));
    }
}
