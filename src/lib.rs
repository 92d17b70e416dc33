//! symbol-art library crate.
//!
//! Converts bitmap images into symbol art: the image is thresholded into a
//! black/white raster and every pixel is replaced by a random symbol from a
//! light or a dark symbol pool. Rendering runs on a worker thread so long
//! renders never block the caller.

pub mod acquire;
pub mod cli;
pub mod config;
pub mod error;
pub mod offload;
pub mod output;
pub mod pipeline;
pub mod raster;
pub mod symbols;
