//! gridsig-core
//!
//! Contracts and runtime pieces shared across the gridsig ecosystem.
//!
//! - `contract`: the `Source` and `Sink` roles and the `SignalHandler` hook.
//! - `fetch`: the `Fetcher` and `Clock` seams injected into polling sources.
//! - `task`: `TaskHandle`, the stop/join handshake around an actor's task.
//! - `sink`: `DrainSink`, a generic sink worker that drains until its input closes.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Actors are Tokio tasks. Signals travel over bounded `tokio::sync::mpsc` channels,
//! stop requests over `tokio::sync::oneshot`, and completion is acknowledged by the
//! task's `JoinHandle`. Constructors that spawn must run inside a Tokio 1.x runtime.
//!
#![warn(missing_docs)]

/// The `Source` and `Sink` roles.
pub mod contract;
/// Fetcher and clock abstractions.
pub mod fetch;
/// Generic drain-until-closed sink worker.
pub mod sink;
/// Actor task handles and drop-time helpers.
pub mod task;

pub use contract::{SignalHandler, Sink, Source};
pub use fetch::{Clock, Fetcher, SystemClock};
pub use sink::DrainSink;
pub use task::{ActorState, TaskHandle};

pub use gridsig_types::{
    Envelope, GridError, ISONE_WSCLIENT, LightThresholds, METRIC_TONS_PER_MIN, RELATIVE_MAX,
    RELATIVE_MIN, Reading, ReadingSet, Signal, SourceConfig, TONS, TONS_PER_MIN, clamp_relative,
    latest, sort_by_time,
};
