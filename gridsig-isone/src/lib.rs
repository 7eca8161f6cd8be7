//! gridsig-isone
//!
//! Emissions source for the ISO New England web-service client. A [`HttpFetcher`]
//! retrieves today's emissions series and caches it for a TTL, [`parse_readings`]
//! validates and orders the response, and [`EmissionsSource`] polls both on a timer and
//! publishes a total-emissions [`Signal`](gridsig_core::Signal) per tick.
//!
//! ```no_run
//! use gridsig_core::Source;
//! use gridsig_isone::EmissionsSource;
//!
//! # async fn demo() -> Result<(), gridsig_core::GridError> {
//! let mut src = EmissionsSource::new_default()?;
//! if let Some(sig) = src.output().recv().await {
//!     println!("{sig}");
//! }
//! src.close().await
//! # }
//! ```
#![warn(missing_docs)]

/// GET adapters: the `HttpGet` seam and its reqwest-backed implementation.
pub mod adapter;
mod fetcher;
mod parse;
mod source;
mod url;

pub use adapter::{HttpGet, HttpResponse, ReqwestGet};
pub use fetcher::HttpFetcher;
pub use parse::parse_readings;
pub use source::{EmissionsSource, EmissionsSourceBuilder, SIGNAL_NAME, derive_signal};
pub use url::emissions_url;
