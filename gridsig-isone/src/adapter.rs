use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use gridsig_core::GridError;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Full response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A 200 response with `body`.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// GET abstraction (so we can inject mocks in tests).
///
/// `Ok(None)` means the transport produced neither a response nor an error; callers
/// treat it as a failure.
#[async_trait]
pub trait HttpGet: Send + Sync {
    /// Perform a GET of `url` and read the whole body.
    async fn get(&self, url: &str) -> Result<Option<HttpResponse>, GridError>;
}

/// Production adapter backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestGet {
    client: reqwest::Client,
}

/// Per-request timeout of the default client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

impl ReqwestGet {
    /// Build a client with the given per-request timeout.
    ///
    /// # Errors
    /// Returns `GridError::InvalidArg` if the TLS backend or client configuration fails.
    pub fn new(timeout: Duration) -> Result<Self, GridError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gridsig/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GridError::InvalidArg(format!("building http client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpGet for ReqwestGet {
    async fn get(&self, url: &str) -> Result<Option<HttpResponse>, GridError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GridError::transport(url, e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| GridError::transport(url, format!("reading body: {e}")))?;
        Ok(Some(HttpResponse {
            status,
            body: body.to_vec(),
        }))
    }
}

impl dyn HttpGet {
    /// Build an `HttpGet` from a closure.
    pub fn from_fn<F>(f: F) -> Arc<dyn HttpGet>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<Option<HttpResponse>, GridError>,
    {
        struct FnGet<F>(F);
        #[async_trait]
        impl<F> HttpGet for FnGet<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<Option<HttpResponse>, GridError>,
        {
            async fn get(&self, url: &str) -> Result<Option<HttpResponse>, GridError> {
                (self.0)(url)
            }
        }
        Arc::new(FnGet(f))
    }
}
