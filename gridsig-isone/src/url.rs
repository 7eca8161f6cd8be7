use chrono::{DateTime, Utc};
use chrono_tz::America::New_York;

/// Query for today's emissions at `now`, appended to `endpoint`.
///
/// `formDate` is `now` in epoch milliseconds; the date range is the current calendar
/// day in the operator's time zone, formatted `MM/DD/YYYY`.
#[must_use]
pub fn emissions_url(endpoint: &str, now: DateTime<Utc>) -> String {
    let today = now.with_timezone(&New_York).format("%m/%d/%Y");
    format!(
        "{endpoint}?_nstmp_formDate={ms}&_nstmp_startDate={today}&_nstmp_endDate={today}\
         &_nstmp_twodays=false&_nstmp_requestType=emissions",
        ms = now.timestamp_millis(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_rolls_over_in_eastern_time() {
        // 03:00 UTC on Jan 2 is still Jan 1 in New York.
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 0, 0).unwrap();
        let url = emissions_url("http://h/ws", now);
        assert!(url.contains("_nstmp_startDate=01/01/2025"), "{url}");
        assert!(url.contains("_nstmp_endDate=01/01/2025"), "{url}");
    }
}
