//! Symbol renderer: turns a binary raster into lines of unicode symbols.
//!
//! Every pixel is replaced by a randomly drawn symbol from one of two pools,
//! the light pool for white pixels and the dark pool for everything else.
//! The scan order is selected by [`Orientation`].

mod pool;
mod render;
mod rng;

pub use pool::{SymbolPool, SymbolPreset, EMOJI_DARK, EMOJI_LIGHT};
pub use render::{render, render_with, Orientation, RenderOutcome};
pub use rng::{SymbolRng, UniformSource};
