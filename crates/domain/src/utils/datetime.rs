//! Local date/time parsing for wire and form values.
//!
//! The backend serialises timestamps as `yyyy-MM-dd'T'HH:mm:ss` local
//! wall-clock values and the registration form produces
//! `yyyy-MM-dd'T'HH:mm`. Values carrying an explicit offset are interpreted
//! as the wall-clock time written in the string, so calendar-day comparisons
//! agree with an ISO date-prefix comparison.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::constants::{FORM_DATETIME_FORMAT, WIRE_DATETIME_FORMAT, WIRE_DATE_FORMAT};

const NAIVE_FORMATS: &[&str] = &[
    WIRE_DATETIME_FORMAT,
    "%Y-%m-%dT%H:%M:%S%.f",
    FORM_DATETIME_FORMAT,
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a wire or form timestamp into a local wall-clock value.
///
/// Accepts, in order: naive `T`/space separated timestamps with or without
/// seconds, RFC 3339 timestamps with an offset (offset discarded), and plain
/// `YYYY-MM-DD` dates (midnight). Returns `None` for anything else.
pub fn parse_local_datetime(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_local());
    }

    NaiveDate::parse_from_str(value, WIRE_DATE_FORMAT).ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Calendar day of a timestamp string, ignoring time-of-day.
pub fn local_date_of(raw: &str) -> Option<NaiveDate> {
    parse_local_datetime(raw).map(|dt| dt.date())
}

/// Append `:00` seconds to a `YYYY-MM-DDTHH:mm` form value.
///
/// Any other input is returned trimmed and otherwise untouched; the backend
/// decides whether it is acceptable.
pub fn ensure_seconds(raw: &str) -> String {
    let value = raw.trim();
    if value.len() == 16 && NaiveDateTime::parse_from_str(value, FORM_DATETIME_FORMAT).is_ok() {
        format!("{value}:00")
    } else {
        value.to_string()
    }
}

/// Render a timestamp in the backend's wire format.
pub fn format_wire(value: NaiveDateTime) -> String {
    value.format(WIRE_DATETIME_FORMAT).to_string()
}
