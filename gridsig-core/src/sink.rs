use async_trait::async_trait;
use tokio::sync::mpsc;

use gridsig_types::{GridError, Signal};

use crate::contract::{SignalHandler, Sink};
use crate::task::TaskHandle;

/// A [`Sink`] that runs a [`SignalHandler`] on its own task and drains its input
/// until the channel closes.
#[derive(Debug)]
pub struct DrainSink {
    name: &'static str,
    tx: mpsc::Sender<Signal>,
    handle: TaskHandle,
}

impl DrainSink {
    /// Spawn the worker task for `handler` with an input buffer of `capacity` signals.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// Returns `GridError::InvalidArg` when `capacity` is zero.
    pub fn spawn<H: SignalHandler>(
        name: &'static str,
        capacity: usize,
        mut handler: H,
    ) -> Result<Self, GridError> {
        if capacity == 0 {
            return Err(GridError::InvalidArg(
                "sink channel capacity must be non-zero".into(),
            ));
        }
        let (tx, mut rx) = mpsc::channel::<Signal>(capacity);

        let join = tokio::spawn(async move {
            #[cfg(feature = "tracing")]
            tracing::info!(sink = name, "starting sink loop");
            if let Err(_e) = handler.start().await {
                #[cfg(feature = "tracing")]
                tracing::warn!(sink = name, error = %_e, "sink start failed");
            }
            while let Some(signal) = rx.recv().await {
                if let Err(_e) = handler.handle(signal).await {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(sink = name, error = %_e, "sink failed to handle signal");
                }
            }
            if let Err(_e) = handler.finish().await {
                #[cfg(feature = "tracing")]
                tracing::warn!(sink = name, error = %_e, "sink finish failed");
            }
            #[cfg(feature = "tracing")]
            tracing::info!(sink = name, "signal channel closed, exiting sink loop");
        });

        Ok(Self {
            name,
            tx,
            handle: TaskHandle::detached(join),
        })
    }
}

#[async_trait]
impl Sink for DrainSink {
    fn name(&self) -> &'static str {
        self.name
    }

    fn input(&self) -> &mpsc::Sender<Signal> {
        &self.tx
    }

    /// Drop the sink's own sender and wait for the worker to drain and finish.
    ///
    /// Only the sender held by the sink is released. Callers that cloned
    /// [`Sink::input`] must drop their clones, or this waits until they do.
    async fn close(&mut self) -> Result<(), GridError> {
        // Swap in a sender whose receiver is already gone so later sends fail
        // instead of queueing into a channel nobody drains.
        let (closed, _) = mpsc::channel(1);
        drop(std::mem::replace(&mut self.tx, closed));
        self.handle.join().await
    }
}
