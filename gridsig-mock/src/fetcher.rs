use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::mpsc;

use gridsig_core::{Fetcher, GridError};

/// Instruction for how one `raw_data` call should behave.
#[derive(Debug, Clone)]
pub enum FetchBehavior {
    /// Return the provided bytes.
    Return(Vec<u8>),
    /// Fail with the provided error.
    Fail(GridError),
    /// Never complete (simulate a stalled request).
    Hang,
}

impl FetchBehavior {
    /// Shorthand for returning a UTF-8 body.
    pub fn body(body: impl Into<String>) -> Self {
        Self::Return(body.into().into_bytes())
    }
}

/// A [`Fetcher`] that plays back a script of behaviors, one per call.
///
/// Once the script runs out the last behavior repeats. An empty script hangs.
#[derive(Debug)]
pub struct ScriptedFetcher {
    script: VecDeque<FetchBehavior>,
    last: FetchBehavior,
    calls: Arc<AtomicUsize>,
    events: Option<mpsc::UnboundedSender<usize>>,
}

impl ScriptedFetcher {
    /// Play back `script` in order.
    pub fn new(script: impl IntoIterator<Item = FetchBehavior>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: FetchBehavior::Hang,
            calls: Arc::new(AtomicUsize::new(0)),
            events: None,
        }
    }

    /// Behave the same way on every call.
    #[must_use]
    pub fn always(behavior: FetchBehavior) -> Self {
        Self::new([behavior])
    }

    /// Shared counter of completed and in-flight calls.
    #[must_use]
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Report each call's 1-based index on the returned channel as it starts.
    #[must_use]
    pub fn with_events(mut self) -> (Self, mpsc::UnboundedReceiver<usize>) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.events = Some(tx);
        (self, rx)
    }

    fn next_behavior(&mut self) -> FetchBehavior {
        if let Some(b) = self.script.pop_front() {
            self.last = b;
        }
        self.last.clone()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn raw_data(&mut self) -> Result<Vec<u8>, GridError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(tx) = &self.events {
            let _ = tx.send(n);
        }
        match self.next_behavior() {
            FetchBehavior::Return(bytes) => Ok(bytes),
            FetchBehavior::Fail(e) => Err(e),
            FetchBehavior::Hang => std::future::pending().await,
        }
    }
}
