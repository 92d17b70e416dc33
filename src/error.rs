//! Precondition errors shared by the raster and symbol stages.

use std::fmt;

/// Which of the two symbol pools an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    /// Pool used for light (255) pixels
    Light,
    /// Pool used for dark (0) pixels
    Dark,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::Light => write!(f, "light"),
            PoolKind::Dark => write!(f, "dark"),
        }
    }
}

/// Invalid input handed to a pipeline stage.
///
/// These are raised before any work starts, so a failing call never
/// produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionError {
    #[error("No symbols supplied for {0} pixels, enter some symbols!")]
    EmptySymbolPool(PoolKind),

    #[error("Threshold must be between 0 and 255, got {0}")]
    ThresholdOutOfRange(i64),

    #[error("RGBA buffer holds {actual} bytes, expected {expected} for a {width}x{height} raster")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
