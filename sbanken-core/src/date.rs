//! Fixed-format timestamp parsing for bank API date fields.
//!
//! The API sends `YYYY-MM-DDTHH:MM:SS`, sometimes with fractional seconds and
//! sometimes with a zone designator (`Z` or `+01:00`). The calendar date is
//! taken as written; no zone conversion is applied.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// A date without time or zone.
pub type CalendarDate = NaiveDate;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT) {
        return Some(dt);
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.naive_local())
}

/// Parse an API timestamp into its calendar date.
pub fn parse_date(text: &str) -> Option<CalendarDate> {
    parse_timestamp(text).map(|dt| dt.date())
}

/// Parse an API timestamp, degrading to the zero date (1970-01-01) on failure.
pub fn parse_date_or_zero(text: &str) -> CalendarDate {
    parse_date(text).unwrap_or_default()
}
