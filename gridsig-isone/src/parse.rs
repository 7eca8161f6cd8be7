use gridsig_core::{Envelope, GridError, ReadingSet, sort_by_time};

/// Decode an emissions response into readings ordered by timestamp.
///
/// The body must be a JSON array holding exactly one envelope. A missing `data` key
/// yields an empty set.
///
/// # Errors
/// `GridError::Parse` for malformed JSON or the wrong shape, and
/// `GridError::UnexpectedEnvelopeCount` when the array length is not one.
pub fn parse_readings(raw: &[u8]) -> Result<ReadingSet, GridError> {
    let envelopes: Vec<Envelope> =
        serde_json::from_slice(raw).map_err(|e| GridError::Parse(e.to_string()))?;
    let count = envelopes.len();
    let [envelope] = <[Envelope; 1]>::try_from(envelopes)
        .map_err(|_| GridError::UnexpectedEnvelopeCount { count })?;
    let mut readings = envelope.data;
    sort_by_time(&mut readings);
    Ok(readings)
}
