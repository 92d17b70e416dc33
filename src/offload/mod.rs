//! Offload runner: renders on worker threads, one live job at a time.
//!
//! A [`RenderJob`] owns everything the renderer needs (binary raster, both
//! pools, orientation) and is moved into a freshly spawned thread. The
//! caller gets a [`RenderHandle`] back immediately and awaits it when it
//! needs the lines. Submitting again cancels the previous job.

mod error;
mod job;
mod runner;

pub use error::OffloadError;
pub use job::{CancelToken, RenderJob};
pub use runner::{OffloadRunner, RenderHandle};
