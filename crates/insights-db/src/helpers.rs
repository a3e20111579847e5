//! Timestamp conversion between `DateTime<Utc>` and the stored TEXT form.
//!
//! Rows are written in the same shape a browser's `Date#toISOString` produces
//! (`2024-05-01T10:20:30.123Z`), so the stored text reads the same from either
//! side. Reads also accept any RFC 3339 offset and `SQLite`'s own
//! `datetime('now')` format for rows written by hand.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DatabaseError;

/// Serialize a timestamp for the `createdAt` column (millisecond precision).
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.000Z"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};

    use super::*;

    #[test]
    fn formats_like_to_iso_string() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap();
        assert_eq!(format_datetime(&dt), "2024-05-01T10:20:30.000Z");
    }

    #[test]
    fn roundtrip_preserves_millisecond_instant() {
        let now = Utc::now();
        let truncated = now.with_nanosecond(now.timestamp_subsec_millis() * 1_000_000).unwrap();
        let parsed = parse_datetime(&format_datetime(&now)).unwrap();
        assert_eq!(parsed, truncated);
    }

    #[test]
    fn parses_offset_and_sqlite_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap();
        assert_eq!(parse_datetime("2026-02-09T16:30:00+02:00").unwrap(), expected);
        assert_eq!(parse_datetime("2026-02-09 14:30:00").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_datetime("yesterday").unwrap_err();
        assert!(matches!(err, DatabaseError::Query(_)));
    }
}
