use async_trait::async_trait;
use chrono::{DateTime, Utc};

use gridsig_types::GridError;

/// Retrieval of one endpoint's raw response bytes.
///
/// Implementations may cache; callers need exclusive access, so a fetcher is owned by
/// exactly one polling loop.
#[async_trait]
pub trait Fetcher: Send {
    /// Return the current response body, from cache or from the network.
    async fn raw_data(&mut self) -> Result<Vec<u8>, GridError>;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    async fn raw_data(&mut self) -> Result<Vec<u8>, GridError> {
        (**self).raw_data().await
    }
}

/// Source of the current time (so we can inject fixed clocks in tests).
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
