//! Gridsig-specific data transfer objects, error type and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod reading;
mod signal;

pub use config::{ISONE_WSCLIENT, LightThresholds, SourceConfig};
pub use error::GridError;
pub use reading::{Envelope, Reading, ReadingSet, latest, sort_by_time};
pub use signal::{
    METRIC_TONS_PER_MIN, RELATIVE_MAX, RELATIVE_MIN, Signal, TONS, TONS_PER_MIN, clamp_relative,
};
