//! Fixed textual timestamp format.
//!
//! Every timestamp leaving the service is RFC 3339 in UTC with microsecond
//! precision and a `Z` designator, e.g. `2026-10-19T08:30:00.000000Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats a UTC timestamp in the wire format.
pub fn format_utc(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Serde adapter for `#[serde(serialize_with = "...")]`.
pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_utc(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_utc_whole_seconds() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        assert_eq!(format_utc(&ts), "2026-10-19T08:30:00.000000Z");
    }

    #[test]
    fn test_format_utc_keeps_microseconds() {
        let ts = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        assert_eq!(format_utc(&ts), "2023-11-14T22:13:20.123456Z");
    }

    #[test]
    fn test_serialize_adapter() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "serialize")]
            at: DateTime<Utc>,
        }

        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let json = serde_json::to_value(Wrapper { at }).unwrap();
        assert_eq!(json["at"], "2026-01-02T03:04:05.000000Z");
    }
}
