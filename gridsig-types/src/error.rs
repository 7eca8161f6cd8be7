use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the gridsig workspace.
///
/// Construction failures, transport and parse failures from the polling loop, hardware
/// failures from indicator sinks, and actor shutdown failures all share this type.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GridError {
    /// A required dependency was not supplied at construction time.
    #[error("missing dependency: {what}")]
    MissingDependency {
        /// Name of the missing dependency (e.g. "fetcher").
        what: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The GET request could not be performed (connection refused, DNS, body read, ...).
    #[error("error fetching {url}: {msg}")]
    Transport {
        /// URL that was requested.
        url: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected response fetching {url}: status {status}")]
    Status {
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The GET adapter returned no response and no error.
    #[error("got no response fetching {url}")]
    EmptyResponse {
        /// URL that was requested.
        url: String,
    },

    /// The response body is not valid envelope JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The response held a number of envelopes other than one.
    #[error("don't know how to handle this many responses: {count}")]
    UnexpectedEnvelopeCount {
        /// Number of top-level envelopes found.
        count: usize,
    },

    /// The response parsed but carried no readings.
    #[error("emissions data short: no readings")]
    ShortData,

    /// The indicator hardware rejected a command.
    #[error("hardware error: {0}")]
    Hardware(String),

    /// Writing to an output stream failed.
    #[error("output error: {0}")]
    Output(String),

    /// A worker task ended abnormally and could not acknowledge shutdown.
    #[error("worker did not shut down cleanly: {0}")]
    Join(String),
}

impl GridError {
    /// Helper: build a `MissingDependency` error.
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingDependency { what: what.into() }
    }

    /// Helper: build a `Transport` error for a URL and message.
    pub fn transport(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Status` error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Returns true if the polling loop recovers from this error on its next tick.
    ///
    /// Transport, parse and short-data failures only skip a tick; everything else
    /// is reported to the caller that triggered it.
    #[must_use]
    pub fn is_tick_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::Status { .. }
                | Self::EmptyResponse { .. }
                | Self::Parse(_)
                | Self::UnexpectedEnvelopeCount { .. }
                | Self::ShortData
        )
    }
}
