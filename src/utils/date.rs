//! Date helpers: timestamp parsing and calendar-day arithmetic.
//!
//! Timestamps are kept as text everywhere else in the crate; this is the
//! only place that turns them into instants.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Naive layouts accepted after RFC 3339 / RFC 2822, interpreted in the
/// caller's time zone.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a backend timestamp. Returns `None` for anything unrecognised;
/// callers treat that as "older than everything, on no day".
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Flask serializes datetimes as "Mon, 01 Sep 2025 08:00:00 GMT"
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return localize(naive, tz);
        }
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    localize(date.and_hms_opt(0, 0, 0)?, tz)
}

/// Calendar day of an instant, as seen in `tz`.
pub fn local_day<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

fn localize<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        // ambiguous wall-clock time (DST fall-back): take the first occurrence
        LocalResult::Ambiguous(first, _) => Some(first.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
    }

    #[test]
    fn rfc3339_and_rfc2822_agree() {
        let a = parse_timestamp("2025-09-01T08:00:00Z", &Utc).unwrap();
        let b = parse_timestamp("Mon, 01 Sep 2025 08:00:00 GMT", &Utc).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn naive_timestamps_use_the_given_zone() {
        let parsed = parse_timestamp("2025-09-01 08:00:00", &ist()).unwrap();
        assert_eq!(parsed, parse_timestamp("2025-09-01T02:30:00Z", &Utc).unwrap());

        let with_fraction = parse_timestamp("2025-09-01T08:00:00.250", &Utc).unwrap();
        assert_eq!(with_fraction.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn bare_date_is_start_of_local_day() {
        let parsed = parse_timestamp("2025-09-01", &ist()).unwrap();
        assert_eq!(local_day(&parsed, &ist()), parse_date("2025-09-01").unwrap());
    }

    #[test]
    fn garbage_is_none() {
        assert!(parse_timestamp("not a date", &Utc).is_none());
        assert!(parse_timestamp("", &Utc).is_none());
        assert!(parse_timestamp("2025-13-45T99:00:00", &Utc).is_none());
    }

    #[test]
    fn local_day_crosses_midnight() {
        let late = parse_timestamp("2025-09-01T20:00:00Z", &Utc).unwrap();
        assert_eq!(local_day(&late, &Utc), parse_date("2025-09-01").unwrap());
        assert_eq!(local_day(&late, &ist()), parse_date("2025-09-02").unwrap());
    }
}
