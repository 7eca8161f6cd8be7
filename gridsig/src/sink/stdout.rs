use async_trait::async_trait;
use chrono::Local;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use gridsig_core::{DrainSink, GridError, Signal, SignalHandler};

/// Writes one `[<timestamp>] Received Signal: <signal>` line per signal.
#[derive(Debug)]
pub struct StdoutSink<W> {
    out: W,
}

impl StdoutSink<tokio::io::Stdout> {
    /// A sink writing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> StdoutSink<W>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    /// A sink writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Start the worker with an input buffer of `capacity` signals.
    ///
    /// # Errors
    /// Returns `GridError::InvalidArg` when `capacity` is zero.
    pub fn spawn(self, capacity: usize) -> Result<DrainSink, GridError> {
        DrainSink::spawn("stdout", capacity, self)
    }
}

fn output_err(e: std::io::Error) -> GridError {
    GridError::Output(e.to_string())
}

#[async_trait]
impl<W> SignalHandler for StdoutSink<W>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    async fn handle(&mut self, signal: Signal) -> Result<(), GridError> {
        let line = format!(
            "[{}] Received Signal: {signal}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f %:z")
        );
        self.out
            .write_all(line.as_bytes())
            .await
            .map_err(output_err)?;
        self.out.flush().await.map_err(output_err)
    }

    async fn finish(&mut self) -> Result<(), GridError> {
        self.out.shutdown().await.map_err(output_err)
    }
}
