//! Test doubles for the gridsig pipeline.
//!
//! - [`fixtures`]: canned emissions responses, including malformed ones.
//! - [`ScriptedFetcher`]: a [`Fetcher`](gridsig_core::Fetcher) that plays back a script of
//!   results and counts its calls.
//! - [`ManualClock`]: a [`Clock`](gridsig_core::Clock) that only moves when told to.

pub mod fixtures;

mod clock;
mod fetcher;

pub use clock::ManualClock;
pub use fetcher::{FetchBehavior, ScriptedFetcher};
