//! Display formatting for backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an ISO-8601 timestamp or date as `Mar 5, 2024`.
///
/// Accepts RFC 3339 (with offset), naive `YYYY-MM-DDTHH:MM:SS[.fff]` as
/// emitted by the backend, or a bare `YYYY-MM-DD`. Anything else is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw.trim()) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_owned(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(stamp.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
