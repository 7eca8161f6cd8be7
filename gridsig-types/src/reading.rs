//! Emissions time-series samples and the envelope they arrive in.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit JSON `null` as the type's default, same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One sample of the emissions time series, in metric tons per minute.
///
/// Missing or `null` numeric fields deserialize as zero; unknown fields (e.g. `Coal`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Reading {
    /// Emissions from natural gas generation.
    #[serde(deserialize_with = "null_as_default")]
    pub natural_gas: f64,
    /// Emissions from oil generation.
    #[serde(deserialize_with = "null_as_default")]
    pub oil: f64,
    /// Emissions from wood generation.
    #[serde(deserialize_with = "null_as_default")]
    pub wood: f64,
    /// Total emissions across all sources.
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
    /// Emissions from refuse generation.
    #[serde(deserialize_with = "null_as_default")]
    pub refuse: f64,
    /// Emissions from landfill gas generation.
    #[serde(deserialize_with = "null_as_default")]
    pub landfill_gas: f64,
    /// Start of the sample window, milliseconds since the Unix epoch.
    #[serde(deserialize_with = "null_as_default")]
    pub begin_date_ms: i64,
    /// Start of the sample window in the operator's local offset.
    pub begin_date: Option<DateTime<FixedOffset>>,
}

/// Readings of one response, ordered by `begin_date_ms` once parsed.
pub type ReadingSet = Vec<Reading>;

/// Outer wrapper of an emissions response.
///
/// A well-formed response is a JSON array holding exactly one envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    /// The readings carried by this envelope.
    #[serde(deserialize_with = "null_as_default")]
    pub data: ReadingSet,
    /// Namespace tag of the web service (`_nstmp_` for ISO-NE).
    #[serde(deserialize_with = "null_as_default")]
    pub namespace: String,
}

/// Sort readings ascending by timestamp; equal timestamps keep their input order.
pub fn sort_by_time(readings: &mut [Reading]) {
    readings.sort_by_key(|r| r.begin_date_ms);
}

/// The most recent reading of a set already sorted by [`sort_by_time`].
#[must_use]
pub fn latest(readings: &[Reading]) -> Option<&Reading> {
    readings.last()
}
