//! gridsig wires emissions sources to output devices.
//!
//! Overview
//! - Sources (see `gridsig-isone`) poll a remote feed and publish [`Signal`]s on a
//!   bounded channel.
//! - Sinks act on signals: [`sink::StdoutSink`] prints them, [`sink::TrafficLightSink`]
//!   maps them to a red/amber/green indicator.
//! - [`pipeline::forward`] moves signals from one source to one sink.
//!
//! Both ends are actors with their own Tokio task. Shut a pipeline down by closing the
//! source first, then the sink, so the sink drains whatever was forwarded.
//!
//! ```rust,ignore
//! use gridsig::pipeline::forward;
//! use gridsig::sink::StdoutSink;
//! use gridsig::{Sink, Source};
//! use gridsig_isone::EmissionsSource;
//!
//! let mut src = EmissionsSource::new_default()?;
//! let mut snk = StdoutSink::stdout().spawn(10)?;
//! forward(&mut src, &snk).await;
//! src.close().await?;
//! snk.close().await?;
//! ```
#![warn(missing_docs)]

/// Source-to-sink forwarding.
pub mod pipeline;
/// Console and indicator-light sinks.
pub mod sink;

pub use gridsig_core::{
    ActorState, DrainSink, GridError, LightThresholds, Signal, SignalHandler, Sink, Source,
    SourceConfig,
};
