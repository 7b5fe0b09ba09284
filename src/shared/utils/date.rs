use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// `start` plus `duration_minutes`, saturating at chrono's representable range.
pub fn end_time(start: DateTime<Utc>, duration_minutes: i64) -> DateTime<Utc> {
    Duration::try_minutes(duration_minutes)
        .and_then(|d| start.checked_add_signed(d))
        .unwrap_or(if duration_minutes < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

/// Formats like JavaScript's `Date#toISOString`, e.g. `2020-12-09T17:00:00.000Z`.
pub fn to_iso_millis(datetime: DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_rfc3339_utc(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
