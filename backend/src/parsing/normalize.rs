//! Field-level normalizers applied to every raw dataset row.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use qtty::time::{Minute, Seconds};

/// Separator between the primary and secondary part of a compound type
/// such as `"Total - Penumbral"`.
pub const TYPE_SEPARATOR: &str = " - ";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse a calendar date, discarding any time-of-day component.
///
/// Returns `None` for anything that is not a recognizable date; callers drop
/// such rows rather than defaulting them.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.date())
}

/// Lowercase the raw type and keep only the primary segment.
///
/// `"Total - Penumbral"` becomes `"total"`; `"Partial"` becomes `"partial"`.
pub fn normalize_type(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    lowered
        .split(TYPE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Convert a raw seconds value into whole minutes.
///
/// Rounds half to even (90 s gives 2, 150 s gives 2). Empty, non-numeric,
/// non-finite and negative inputs are absent rather than zero.
pub fn seconds_to_minutes(raw: &str) -> Option<i64> {
    let seconds: f64 = raw.trim().parse().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }

    let minutes = Seconds::new(seconds).to::<Minute>().value();
    Some(minutes.round_ties_even() as i64)
}
