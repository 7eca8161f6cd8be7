//! The bounded measurement passed from sources to sinks.

use serde::{Deserialize, Serialize};

/// Unit label for a quantity of emissions.
pub const TONS: &str = "tons";
/// Unit label for an emissions rate.
pub const TONS_PER_MIN: &str = "tons-per-min";
/// Unit label carried by signals derived from the ISO-NE emissions feed.
pub const METRIC_TONS_PER_MIN: &str = "Metric Tons/min";

/// Lower bound of [`Signal::relative_value`].
pub const RELATIVE_MIN: i8 = -100;
/// Upper bound of [`Signal::relative_value`].
pub const RELATIVE_MAX: i8 = 100;

/// A derived measurement, scaled to a relative value in `[-100, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Name of the measured quantity (e.g. "TotalEmissions").
    pub name: String,
    /// Position of the raw value on a `-100..=100` scale.
    pub relative_value: i8,
    /// The unscaled measurement.
    pub raw_value: f64,
    /// Unit of `raw_value`.
    pub raw_unit: String,
}

impl Signal {
    /// Build a signal whose relative value is the truncated raw value, clamped to
    /// `[-100, 100]`.
    ///
    /// Truncation is toward zero: `52.99` becomes `52`, `-3.7` becomes `-3`.
    pub fn truncated(name: impl Into<String>, raw_value: f64, raw_unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relative_value: clamp_relative(raw_value),
            raw_value,
            raw_unit: raw_unit.into(),
        }
    }
}

/// Truncate `value` toward zero and clamp it into the relative range.
///
/// NaN maps to zero.
#[must_use]
pub fn clamp_relative(value: f64) -> i8 {
    // `as` saturates on overflow and maps NaN to 0.
    let truncated = value.trunc() as i64;
    truncated.clamp(i64::from(RELATIVE_MIN), i64::from(RELATIVE_MAX)) as i8
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({} {})",
            self.name, self.relative_value, self.raw_value, self.raw_unit
        )
    }
}
