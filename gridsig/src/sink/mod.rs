mod stdout;
mod traffic_light;

pub use stdout::StdoutSink;
pub use traffic_light::{Light, TrafficLight, TrafficLightSink};

/// Default input buffer of the bundled sinks.
pub const DEFAULT_CAPACITY: usize = 10;
