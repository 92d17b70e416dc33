//! Offload error types

use crate::error::PreconditionError;

/// Ways a submitted render can fail to deliver its lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OffloadError {
    /// The renderer rejected the job before doing any work
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// The job could not be handed over to a worker
    #[error("Failed to dispatch render job: {0}")]
    Transport(String),

    /// The worker died before reporting a result
    #[error("Render worker terminated unexpectedly")]
    WorkerCrashed,

    /// A newer submission replaced this one
    #[error("Render cancelled by a newer request")]
    Cancelled,
}

impl OffloadError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, OffloadError::Cancelled)
    }
}
