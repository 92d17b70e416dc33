//! Single-slot runner that renders on a dedicated worker thread.

use std::io;
use std::thread;

use tokio::sync::oneshot;

use super::error::OffloadError;
use super::job::{CancelToken, RenderJob};
use crate::error::PreconditionError;
use crate::symbols::RenderOutcome;

type WorkerResult = Result<RenderOutcome, PreconditionError>;

/// The run currently registered with a runner.
#[derive(Debug)]
struct ActiveRun {
    id: u64,
    token: CancelToken,
}

/// Dispatches render jobs to worker threads, keeping at most one live.
///
/// Every [`submit`](OffloadRunner::submit) first cancels the previously
/// registered run, so only the newest handle can resolve to lines.
#[derive(Debug, Default)]
pub struct OffloadRunner {
    current: Option<ActiveRun>,
    next_id: u64,
}

impl OffloadRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the registered run, if any has been submitted.
    pub fn current_id(&self) -> Option<u64> {
        self.current.as_ref().map(|run| run.id)
    }

    /// Start rendering `job` on a new worker thread.
    ///
    /// Returns immediately. The job is moved into the worker; nothing is
    /// shared with the caller except the cancel flag.
    pub fn submit(&mut self, job: RenderJob) -> RenderHandle {
        log::debug!(
            "Submitting {}x{} render ({:?})",
            job.binary.width(),
            job.binary.height(),
            job.orientation
        );
        self.dispatch(move |token| job.run(token))
    }

    pub(crate) fn dispatch<F>(&mut self, work: F) -> RenderHandle
    where
        F: FnOnce(&CancelToken) -> WorkerResult + Send + 'static,
    {
        self.dispatch_with(spawn_thread, work)
    }

    /// Register a new run and hand `work` to `spawn`.
    pub(crate) fn dispatch_with<S, F>(&mut self, spawn: S, work: F) -> RenderHandle
    where
        S: FnOnce(String, WorkerTask) -> io::Result<()>,
        F: FnOnce(&CancelToken) -> WorkerResult + Send + 'static,
    {
        if let Some(previous) = self.current.take() {
            log::info!("Cancelling render #{} for a newer request", previous.id);
            previous.token.cancel();
        }

        self.next_id += 1;
        let id = self.next_id;
        let token = CancelToken::new();
        let worker_token = token.clone();
        let (tx, rx) = oneshot::channel();

        let task: WorkerTask = Box::new(move || {
            let result = work(&worker_token);
            // Receiver is gone when the handle was dropped.
            let _ = tx.send(result);
        });

        let state = match spawn(format!("render-worker-{}", id), task) {
            Ok(()) => {
                log::debug!("Render #{} started", id);
                HandleState::Pending(rx)
            }
            Err(e) => {
                log::error!("Failed to start render worker #{}: {}", id, e);
                HandleState::Failed(OffloadError::Transport(e.to_string()))
            }
        };

        self.current = Some(ActiveRun {
            id,
            token: token.clone(),
        });

        RenderHandle { id, token, state }
    }
}

/// Work moved onto a worker, ending with the result send.
pub(crate) type WorkerTask = Box<dyn FnOnce() + Send + 'static>;

fn spawn_thread(name: String, task: WorkerTask) -> io::Result<()> {
    thread::Builder::new().name(name).spawn(task).map(|_| ())
}

#[derive(Debug)]
enum HandleState {
    Pending(oneshot::Receiver<WorkerResult>),
    Failed(OffloadError),
}

/// Pending result of one submitted render.
#[derive(Debug)]
pub struct RenderHandle {
    id: u64,
    token: CancelToken,
    state: HandleState,
}

impl RenderHandle {
    /// Sequence number of the submission, starting at 1 per runner.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True once a newer submission has superseded this one.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for the worker's lines.
    ///
    /// # Errors
    /// - `OffloadError::Cancelled` if a newer job was submitted meanwhile,
    ///   even when this worker already finished
    /// - `OffloadError::Precondition` if the renderer rejected the job
    /// - `OffloadError::Transport` if no worker could be started
    /// - `OffloadError::WorkerCrashed` if the worker died without reporting
    pub async fn wait(self) -> Result<Vec<String>, OffloadError> {
        let received = match self.state {
            HandleState::Pending(rx) => rx.await,
            HandleState::Failed(e) => return Err(e),
        };
        resolve(self.id, &self.token, received)
    }

    /// Blocking variant of [`wait`](RenderHandle::wait).
    ///
    /// Must not be called from within an async runtime.
    pub fn wait_blocking(self) -> Result<Vec<String>, OffloadError> {
        let received = match self.state {
            HandleState::Pending(rx) => rx.blocking_recv(),
            HandleState::Failed(e) => return Err(e),
        };
        resolve(self.id, &self.token, received)
    }
}

fn resolve(
    id: u64,
    token: &CancelToken,
    received: Result<WorkerResult, oneshot::error::RecvError>,
) -> Result<Vec<String>, OffloadError> {
    if token.is_cancelled() {
        log::debug!("Discarding result of cancelled render #{}", id);
        return Err(OffloadError::Cancelled);
    }

    match received {
        Ok(Ok(RenderOutcome::Complete(lines))) => {
            log::debug!("Render #{} finished with {} lines", id, lines.len());
            Ok(lines)
        }
        Ok(Ok(RenderOutcome::Stopped)) => Err(OffloadError::Cancelled),
        Ok(Err(e)) => Err(OffloadError::Precondition(e)),
        Err(_) => {
            log::error!("Render worker #{} died before reporting", id);
            Err(OffloadError::WorkerCrashed)
        }
    }
}
