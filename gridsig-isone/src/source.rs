use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, MissedTickBehavior};

use gridsig_core::{
    ActorState, Fetcher, GridError, METRIC_TONS_PER_MIN, Reading, Signal, Source, SourceConfig,
    TaskHandle, latest,
};

use crate::fetcher::HttpFetcher;
use crate::parse::parse_readings;

/// Name carried by every signal this source emits.
pub const SIGNAL_NAME: &str = "TotalEmissions";

/// Polling source of total-emissions signals.
///
/// Every `poll_interval` the loop fetches, parses and, if the response holds any
/// readings, emits one [`Signal`] derived from the latest reading. Failed ticks are
/// logged and skipped. The output channel closes once the loop exits.
#[derive(Debug)]
pub struct EmissionsSource {
    rx: mpsc::Receiver<Signal>,
    handle: TaskHandle,
}

/// Builder for an [`EmissionsSource`].
pub struct EmissionsSourceBuilder {
    fetcher: Option<Box<dyn Fetcher>>,
    poll_interval: Duration,
    channel_capacity: usize,
}

impl Default for EmissionsSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmissionsSourceBuilder {
    /// Start with no fetcher and the default interval and capacity.
    #[must_use]
    pub fn new() -> Self {
        let cfg = SourceConfig::default();
        Self {
            fetcher: None,
            poll_interval: cfg.poll_interval,
            channel_capacity: cfg.channel_capacity,
        }
    }

    /// Use `fetcher` for every tick. Required.
    #[must_use]
    pub fn with_fetcher(self, fetcher: impl Fetcher + 'static) -> Self {
        self.with_boxed_fetcher(Box::new(fetcher))
    }

    /// Use an already boxed fetcher.
    #[must_use]
    pub fn with_boxed_fetcher(mut self, fetcher: Box<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Delay between ticks. Must be non-zero.
    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Capacity of the output channel. Must be non-zero.
    #[must_use]
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Take interval and capacity from `cfg`. The fetcher is set separately.
    #[must_use]
    pub fn config(self, cfg: &SourceConfig) -> Self {
        self.poll_interval(cfg.poll_interval)
            .channel_capacity(cfg.channel_capacity)
    }

    /// Spawn the polling loop.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// Returns `MissingDependency` without a fetcher and `InvalidArg` for a zero
    /// interval or capacity. Nothing is spawned on error.
    pub fn build(self) -> Result<EmissionsSource, GridError> {
        let fetcher = self.fetcher.ok_or_else(|| GridError::missing("fetcher"))?;
        if self.poll_interval.is_zero() {
            return Err(GridError::InvalidArg(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.channel_capacity == 0 {
            return Err(GridError::InvalidArg(
                "channel capacity must be non-zero".to_string(),
            ));
        }

        let (tx, rx) = mpsc::channel(self.channel_capacity);
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = tokio::spawn(run(fetcher, self.poll_interval, tx, stop_rx));
        Ok(EmissionsSource {
            rx,
            handle: TaskHandle::new(join, stop_tx),
        })
    }
}

impl EmissionsSource {
    /// Returns a builder; a fetcher must be supplied before `build()`.
    #[must_use]
    pub fn builder() -> EmissionsSourceBuilder {
        EmissionsSourceBuilder::new()
    }

    /// Poll the ISO-NE endpoint with the default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new_default() -> Result<Self, GridError> {
        Self::from_config(&SourceConfig::default())
    }

    /// Poll `cfg.endpoint` with an HTTP fetcher cached for `cfg.cache_ttl`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or `cfg` is invalid.
    pub fn from_config(cfg: &SourceConfig) -> Result<Self, GridError> {
        Self::builder()
            .config(cfg)
            .with_fetcher(HttpFetcher::emissions(cfg)?)
            .build()
    }

    /// Where the polling loop is in its lifecycle.
    #[must_use]
    pub fn state(&self) -> ActorState {
        self.handle.state()
    }
}

#[async_trait]
impl Source for EmissionsSource {
    fn name(&self) -> &'static str {
        "isone-emissions"
    }

    fn output(&mut self) -> &mut mpsc::Receiver<Signal> {
        &mut self.rx
    }

    async fn close(&mut self) -> Result<(), GridError> {
        let stopped = self.handle.stop().await;
        // Signals already queued are discarded.
        self.rx.close();
        while self.rx.try_recv().is_ok() {}
        stopped
    }
}

/// Reduce a sorted reading set to the signal for its latest reading.
///
/// # Errors
/// Returns `GridError::ShortData` for an empty set.
pub fn derive_signal(readings: &[Reading]) -> Result<Signal, GridError> {
    let r = latest(readings).ok_or(GridError::ShortData)?;
    Ok(Signal::truncated(SIGNAL_NAME, r.total, METRIC_TONS_PER_MIN))
}

async fn run(
    mut fetcher: Box<dyn Fetcher>,
    interval: Duration,
    tx: mpsc::Sender<Signal>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!(interval = ?interval, "starting source loop");
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = &mut stop_rx => break,
            _ = ticker.tick() => {}
        }
        let polled = tokio::select! {
            _ = &mut stop_rx => break,
            polled = poll_once(fetcher.as_mut()) => polled,
        };
        let Some(signal) = polled else { continue };
        tokio::select! {
            _ = &mut stop_rx => break,
            sent = tx.send(signal) => {
                if sent.is_err() {
                    // Receiver gone; nobody left to publish to.
                    break;
                }
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!("closing and exiting source loop");
}

async fn poll_once(fetcher: &mut dyn Fetcher) -> Option<Signal> {
    let raw = match fetcher.raw_data().await {
        Ok(raw) => raw,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            log_fetch_error(&_e);
            return None;
        }
    };
    let readings = match parse_readings(&raw) {
        Ok(readings) => readings,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, bytes = raw.len(), "error parsing data");
            return None;
        }
    };
    match derive_signal(&readings) {
        Ok(signal) => Some(signal),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(raw = %String::from_utf8_lossy(&raw), "emissions data short");
            None
        }
    }
}

#[cfg(feature = "tracing")]
fn log_fetch_error(e: &GridError) {
    if e.is_tick_recoverable() {
        tracing::warn!(error = %e, "error fetching data");
    } else {
        tracing::error!(error = %e, "error fetching data");
    }
}
