use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use gridsig_types::GridError;

/// A task that can report completion and be cancelled.
pub trait Abortable {
    /// Cancel the task.
    fn abort(&mut self);
    /// True once the task has run to completion (or was cancelled).
    fn is_finished(&self) -> bool;
}

impl Abortable for JoinHandle<()> {
    fn abort(&mut self) {
        JoinHandle::abort(self);
    }

    fn is_finished(&self) -> bool {
        JoinHandle::is_finished(self)
    }
}

/// The sending half of a stop request.
pub trait Stoppable {
    /// Ask the task to stop. Delivery is best effort.
    fn request_stop(self);
}

impl Stoppable for oneshot::Sender<()> {
    fn request_stop(self) {
        let _ = self.send(());
    }
}

/// Tear down an actor that was never closed.
///
/// A poller dropped without `close()` would otherwise keep ticking and issuing HTTP
/// requests for the life of the runtime, since a detached Tokio task outlives its
/// `JoinHandle`. The stop request goes out first so a loop parked on it can exit on its
/// own; a task still running afterwards is aborted, which cancels an in-flight fetch at
/// its next await point.
pub fn drop_impl<H, S>(task: &mut Option<H>, stop: &mut Option<S>)
where
    H: Abortable,
    S: Stoppable,
{
    if let Some(stop) = stop.take() {
        stop.request_stop();
    }
    if let Some(mut task) = task.take().filter(|t| !t.is_finished()) {
        task.abort();
    }
}

/// Coarse lifecycle of an actor, as observed through its [`TaskHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorState {
    /// The loop is live and no stop was requested.
    Running,
    /// A stop was requested and the loop has not exited yet.
    Stopping,
    /// The loop has exited.
    Stopped,
}

/// Owned handle to an actor's background task.
///
/// Stopping is a two-step handshake: a one-shot stop request, then awaiting the
/// task's `JoinHandle` as the completion acknowledgement. Dropping a handle that was
/// never stopped sends the stop request and aborts the task if it is still running.
#[derive(Debug)]
pub struct TaskHandle {
    inner: Option<JoinHandle<()>>,
    stop_tx: Option<oneshot::Sender<()>>,
    stop_requested: bool,
}

impl TaskHandle {
    /// Wrap a task that listens for a stop request on the paired receiver.
    #[must_use]
    pub const fn new(inner: JoinHandle<()>, stop_tx: oneshot::Sender<()>) -> Self {
        Self {
            inner: Some(inner),
            stop_tx: Some(stop_tx),
            stop_requested: false,
        }
    }

    /// Wrap a task that stops on its own, e.g. when its input channel closes.
    #[must_use]
    pub const fn detached(inner: JoinHandle<()>) -> Self {
        Self {
            inner: Some(inner),
            stop_tx: None,
            stop_requested: false,
        }
    }

    /// Send the stop request without waiting. Later calls are no-ops.
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
        if let Some(tx) = self.stop_tx.take() {
            tx.request_stop();
        }
    }

    /// Wait for the task to finish.
    ///
    /// Returns `Ok(())` immediately if the task was already joined.
    ///
    /// # Errors
    /// Returns `GridError::Join` if the task panicked or was aborted.
    pub async fn join(&mut self) -> Result<(), GridError> {
        let Some(h) = self.inner.as_mut() else {
            return Ok(());
        };
        // Keep the handle until the task exits so a cancelled join can be retried.
        let res = h.await;
        self.inner = None;
        res.map_err(|e| GridError::Join(e.to_string()))
    }

    /// Request a stop and wait for the task to acknowledge it by exiting.
    ///
    /// # Errors
    /// Returns `GridError::Join` if the task panicked or was aborted.
    pub async fn stop(&mut self) -> Result<(), GridError> {
        self.request_stop();
        self.join().await
    }

    /// True once the task has exited or been joined.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ActorState {
        if self.is_finished() {
            ActorState::Stopped
        } else if self.stop_requested {
            ActorState::Stopping
        } else {
            ActorState::Running
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        drop_impl(&mut self.inner, &mut self.stop_tx);
    }
}
