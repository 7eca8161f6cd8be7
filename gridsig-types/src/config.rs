//! Configuration types shared by sources and the binary.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URL of the ISO New England web-service client.
pub const ISONE_WSCLIENT: &str = "https://www.iso-ne.com/ws/wsclient";

/// Configuration for a polling source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Delay between polling ticks. The first tick fires one interval after start.
    pub poll_interval: Duration,
    /// How long fetched bytes stay fresh before the next tick refetches them.
    pub cache_ttl: Duration,
    /// Capacity of the output signal channel. A full channel blocks the poller.
    pub channel_capacity: usize,
    /// Base URL the request query is appended to.
    pub endpoint: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10),
            cache_ttl: Duration::from_secs(10 * 60),
            channel_capacity: 10,
            endpoint: ISONE_WSCLIENT.to_string(),
        }
    }
}

/// Threshold configuration for indicator-light sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightThresholds {
    /// Relative values strictly above this show amber.
    pub amber: i8,
    /// Relative values strictly above this show red.
    pub red: i8,
}

impl Default for LightThresholds {
    fn default() -> Self {
        Self { amber: 50, red: 75 }
    }
}
