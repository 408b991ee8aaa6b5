//! Relative time formatting for last-commit timestamps

/// Returned for timestamps that are not numbers
pub const INVALID_TIME: &str = "Invalid time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Units in descending order with their length in seconds
const UNITS: [(Unit, f64); 6] = [
    (Unit::Year, 365.0 * 24.0 * 60.0 * 60.0),
    (Unit::Month, 30.0 * 24.0 * 60.0 * 60.0),
    (Unit::Day, 24.0 * 60.0 * 60.0),
    (Unit::Hour, 60.0 * 60.0),
    (Unit::Minute, 60.0),
    (Unit::Second, 1.0),
];

impl Unit {
    fn name(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }

    /// Phrase used instead of a number for -1, 0 and 1
    fn idiom(self, value: i64) -> Option<&'static str> {
        match (self, value) {
            (Unit::Second, 0) => Some("now"),
            (Unit::Minute, 0) => Some("this minute"),
            (Unit::Hour, 0) => Some("this hour"),
            (Unit::Day, -1) => Some("yesterday"),
            (Unit::Day, 0) => Some("today"),
            (Unit::Day, 1) => Some("tomorrow"),
            (Unit::Month, -1) => Some("last month"),
            (Unit::Month, 0) => Some("this month"),
            (Unit::Month, 1) => Some("next month"),
            (Unit::Year, -1) => Some("last year"),
            (Unit::Year, 0) => Some("this year"),
            (Unit::Year, 1) => Some("next year"),
            _ => None,
        }
    }
}

/// Format a Unix timestamp (seconds, as text) relative to the current time
pub fn format_relative_time(timestamp: &str) -> String {
    format_relative_time_at(timestamp, chrono::Utc::now().timestamp_millis())
}

/// Format a Unix timestamp (seconds, as text) relative to `now_ms`
///
/// Past and future are handled symmetrically ("2 hours ago", "in 2 hours").
/// Input that is not a finite number yields [`INVALID_TIME`].
pub fn format_relative_time_at(timestamp: &str, now_ms: i64) -> String {
    let seconds = match timestamp.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return INVALID_TIME.to_string(),
    };

    let diff = (seconds * 1000.0 - now_ms as f64) / 1000.0;
    let (unit, length) = UNITS
        .iter()
        .copied()
        .find(|&(_, length)| diff.abs() >= length)
        .unwrap_or((Unit::Second, 1.0));

    // Half-up rounding, so -2.5 becomes -2 and 2.5 becomes 3
    let value = (diff / length + 0.5).floor() as i64;
    phrase(value, unit)
}

fn phrase(value: i64, unit: Unit) -> String {
    if let Some(idiom) = unit.idiom(value) {
        return idiom.to_string();
    }

    let count = value.unsigned_abs();
    let plural = if count == 1 { "" } else { "s" };
    if value > 0 {
        format!("in {} {}{}", count, unit.name(), plural)
    } else {
        format!("{} {}{} ago", count, unit.name(), plural)
    }
}
