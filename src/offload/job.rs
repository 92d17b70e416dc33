//! Render job payload and cancellation token.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::PreconditionError;
use crate::raster::Raster;
use crate::symbols::{render_with, Orientation, RenderOutcome, SymbolPool, SymbolRng};

/// Everything a worker needs to render, as owned plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    pub binary: Raster,
    pub light: SymbolPool,
    pub dark: SymbolPool,
    pub orientation: Orientation,
}

impl RenderJob {
    pub fn new(
        binary: Raster,
        light: SymbolPool,
        dark: SymbolPool,
        orientation: Orientation,
    ) -> Self {
        Self {
            binary,
            light,
            dark,
            orientation,
        }
    }

    /// Run the renderer until done or until `token` is cancelled.
    pub fn run(&self, token: &CancelToken) -> Result<RenderOutcome, PreconditionError> {
        let mut rng = SymbolRng::from_entropy();
        render_with(
            &self.binary,
            &self.light,
            &self.dark,
            self.orientation,
            &mut rng,
            || token.is_cancelled(),
        )
    }
}

/// Shared cancellation flag between the runner and one worker.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
