use std::fmt;

use async_trait::async_trait;

use gridsig_core::{DrainSink, GridError, LightThresholds, Signal, SignalHandler};

/// Colour shown by a three-lamp indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Light {
    /// Low emissions.
    Green,
    /// Elevated emissions.
    Amber,
    /// High emissions.
    Red,
}

impl Light {
    /// Colour for a relative value: above `red` is red, above `amber` is amber.
    #[must_use]
    pub const fn for_value(relative_value: i8, thresholds: &LightThresholds) -> Self {
        if relative_value > thresholds.red {
            Self::Red
        } else if relative_value > thresholds.amber {
            Self::Amber
        } else {
            Self::Green
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
        })
    }
}

/// Driver for a physical indicator light (e.g. a USB relay board).
#[async_trait]
pub trait TrafficLight: Send + 'static {
    /// Switch the indicator to `light`.
    async fn set(&mut self, light: Light) -> Result<(), GridError>;
}

#[async_trait]
impl<T: TrafficLight + ?Sized> TrafficLight for Box<T> {
    async fn set(&mut self, light: Light) -> Result<(), GridError> {
        (**self).set(light).await
    }
}

/// Shows each signal's relative value on a [`TrafficLight`].
///
/// The light is set to green when the worker starts and written again only when the
/// colour changes. A failed write is retried on the next signal.
#[derive(Debug)]
pub struct TrafficLightSink<L> {
    light: L,
    thresholds: LightThresholds,
    shown: Option<Light>,
}

impl<L: TrafficLight> TrafficLightSink<L> {
    /// Drive `light` with the default thresholds (amber above 50, red above 75).
    pub fn new(light: L) -> Self {
        Self::with_thresholds(light, LightThresholds::default())
    }

    /// Drive `light` with custom thresholds.
    pub const fn with_thresholds(light: L, thresholds: LightThresholds) -> Self {
        Self {
            light,
            thresholds,
            shown: None,
        }
    }

    /// Start the worker with an input buffer of `capacity` signals.
    ///
    /// # Errors
    /// Returns `GridError::InvalidArg` when `capacity` is zero.
    pub fn spawn(self, capacity: usize) -> Result<DrainSink, GridError> {
        DrainSink::spawn("traffic-light", capacity, self)
    }

    async fn show(&mut self, light: Light) -> Result<(), GridError> {
        if self.shown == Some(light) {
            return Ok(());
        }
        self.light.set(light).await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(light = %light, "indicator changed");
        self.shown = Some(light);
        Ok(())
    }
}

#[async_trait]
impl<L: TrafficLight> SignalHandler for TrafficLightSink<L> {
    async fn start(&mut self) -> Result<(), GridError> {
        self.show(Light::Green).await
    }

    async fn handle(&mut self, signal: Signal) -> Result<(), GridError> {
        #[cfg(feature = "tracing")]
        tracing::info!(signal = %signal, "received signal");
        self.show(Light::for_value(signal.relative_value, &self.thresholds))
            .await
    }
}
