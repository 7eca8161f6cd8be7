//! The two roles of the pipeline: producers and consumers of [`Signal`]s.

use async_trait::async_trait;
use tokio::sync::mpsc;

use gridsig_types::{GridError, Signal};

/// An actor producing a stream of signals.
///
/// The output channel closes when the source stops; after [`Source::close`] returns no
/// further signal is delivered.
#[async_trait]
pub trait Source: Send {
    /// A stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Receiving end of the signal stream.
    fn output(&mut self) -> &mut mpsc::Receiver<Signal>;

    /// Stop the source and wait until its loop has exited.
    ///
    /// Intended to be called once; a second call finds nothing to stop and returns `Ok(())`.
    async fn close(&mut self) -> Result<(), GridError>;
}

/// An actor consuming a stream of signals and acting on them.
///
/// A conforming sink drains its input until the channel closes and only then lets
/// [`Sink::close`] return.
#[async_trait]
pub trait Sink: Send {
    /// A stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Sending end of the sink's input. Sends fail once the sink is closed.
    ///
    /// Clones of this sender keep the input channel open: a sink that drains until its
    /// channel closes will not finish `close()` until every clone has been dropped.
    fn input(&self) -> &mpsc::Sender<Signal>;

    /// Close the input and wait until every queued signal has been handled.
    ///
    /// Intended to be called once; a second call returns `Ok(())`.
    async fn close(&mut self) -> Result<(), GridError>;
}

/// Per-signal behavior of a sink whose worker is run by [`DrainSink`].
#[async_trait]
pub trait SignalHandler: Send + 'static {
    /// Called once in the worker before the first signal.
    async fn start(&mut self) -> Result<(), GridError> {
        Ok(())
    }

    /// Act on one signal. Errors are logged and the worker keeps draining.
    async fn handle(&mut self, signal: Signal) -> Result<(), GridError>;

    /// Called once after the input channel closed.
    async fn finish(&mut self) -> Result<(), GridError> {
        Ok(())
    }
}
