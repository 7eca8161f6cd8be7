use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};

use gridsig_core::{Clock, Fetcher, GridError, SourceConfig, SystemClock};

use crate::adapter::{DEFAULT_TIMEOUT, HttpGet, ReqwestGet};
use crate::url::emissions_url;

type UrlFn = Box<dyn Fn(DateTime<Utc>) -> String + Send + Sync>;

/// A [`Fetcher`] that GETs a time-dependent URL and caches the body for a fixed TTL.
///
/// While `now <= expiry` the cached bytes are returned without network I/O. Once
/// expired, a fetch replaces the cache on success and leaves it untouched on failure;
/// failures are reported, never masked with stale bytes.
pub struct HttpFetcher {
    url: UrlFn,
    clock: Arc<dyn Clock>,
    http: Arc<dyn HttpGet>,
    ttl: Duration,
    cache: Option<Vec<u8>>,
    expiry: DateTime<Utc>,
}

impl fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("ttl", &self.ttl)
            .field("cached_bytes", &self.cache.as_ref().map(Vec::len))
            .field("expiry", &self.expiry)
            .finish_non_exhaustive()
    }
}

impl HttpFetcher {
    /// Assemble a fetcher from its injected parts. The cache starts empty and expired.
    pub fn new<U>(url: U, clock: Arc<dyn Clock>, http: Arc<dyn HttpGet>, ttl: Duration) -> Self
    where
        U: Fn(DateTime<Utc>) -> String + Send + Sync + 'static,
    {
        Self {
            url: Box::new(url),
            clock,
            http,
            ttl,
            cache: None,
            expiry: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// The emissions fetcher: wall clock, reqwest transport, and `config`'s endpoint and TTL.
    ///
    /// # Errors
    /// Returns `GridError::InvalidArg` if the HTTP client cannot be built.
    pub fn emissions(config: &SourceConfig) -> Result<Self, GridError> {
        let endpoint = config.endpoint.clone();
        Ok(Self::new(
            move |now| emissions_url(&endpoint, now),
            Arc::new(SystemClock),
            Arc::new(ReqwestGet::new(DEFAULT_TIMEOUT)?),
            config.cache_ttl,
        ))
    }

    /// Mark the cache expired so the next call fetches. Cached bytes stay until replaced.
    pub fn flush_cache(&mut self) {
        self.expiry = DateTime::<Utc>::UNIX_EPOCH;
    }

    /// Instant after which the cached bytes are stale.
    #[must_use]
    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }

    /// Bytes from the last successful fetch, fresh or not.
    #[must_use]
    pub fn cached(&self) -> Option<&[u8]> {
        self.cache.as_deref()
    }

    fn expiry_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let ttl = TimeDelta::from_std(self.ttl).unwrap_or(TimeDelta::MAX);
        now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn raw_data(&mut self) -> Result<Vec<u8>, GridError> {
        let now = self.clock.now();
        if let Some(bytes) = &self.cache
            && now <= self.expiry
        {
            return Ok(bytes.clone());
        }

        let url = (self.url)(now);
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, "fetching");

        let resp = match self.http.get(&url).await {
            Ok(Some(resp)) => resp,
            Ok(None) => return Err(GridError::EmptyResponse { url }),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(url = %url, error = %e, "fetch failed");
                return Err(e);
            }
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(status = resp.status, bytes = resp.body.len(), "response");
        if !resp.is_success() {
            return Err(GridError::status(url, resp.status));
        }

        self.expiry = self.expiry_from(self.clock.now());
        self.cache = Some(resp.body.clone());
        Ok(resp.body)
    }
}
