//! The three screens that show logs. They share the normalizer and only
//! differ in which filters they apply and which fields they display.

use crate::core::filter::LogFilter;
use crate::core::normalizer::LogNormalizer;
use crate::models::{KindFilter, LogEvent, LogSummary, StudentIdentity};
use chrono::{NaiveDate, TimeZone};
use serde::Serialize;

/// Number of rows in the dashboard "recent activity" list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub date: NaiveDate,
    pub summary: LogSummary,
    pub recent: Vec<LogEvent>,
}

/// Administrator dashboard: counts for `today` and the latest events.
pub fn dashboard<Tz: TimeZone>(
    normalizer: &LogNormalizer<Tz>,
    events: &[LogEvent],
    today: NaiveDate,
    recent_limit: usize,
) -> DashboardView {
    DashboardView {
        date: today,
        summary: normalizer.summarize(events, today),
        recent: normalizer.recent(events, recent_limit),
    }
}

/// Administrator log browser: newest first, then date/kind/search filters.
pub fn manage_logs<Tz: TimeZone>(
    normalizer: &LogNormalizer<Tz>,
    events: &[LogEvent],
    filter: &LogFilter,
) -> Vec<LogEvent> {
    let sorted = normalizer.sort_descending(events);
    if filter.is_identity() {
        return sorted;
    }
    normalizer.filter(&sorted, filter)
}

/// Student's own log browser. Rows are shown under the student's identity
/// and there is no search box, so only date and kind apply.
pub fn student_logs<Tz: TimeZone>(
    normalizer: &LogNormalizer<Tz>,
    events: &[LogEvent],
    identity: &StudentIdentity,
    date: Option<NaiveDate>,
    kind: KindFilter,
) -> Vec<LogEvent> {
    let own: Vec<LogEvent> = events
        .iter()
        .cloned()
        .map(|e| e.with_identity(identity))
        .collect();

    let mut filter = LogFilter::new().kind(kind);
    if let Some(d) = date {
        filter = filter.on(d);
    }

    let sorted = normalizer.sort_descending(&own);
    normalizer.filter(&sorted, &filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventKind, RawAttendanceRecord};
    use chrono::Utc;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Vec<RawAttendanceRecord> {
        vec![
            RawAttendanceRecord::new("1")
                .with_student("42")
                .with_entry("2025-09-01T08:00:00Z", Some("On Time"))
                .with_exit("2025-09-01T18:00:00Z", Some("Late")),
            RawAttendanceRecord::new("2")
                .with_student("42")
                .with_entry("2025-09-02T08:10:00Z", Some("Late")),
        ]
    }

    #[test]
    fn dashboard_counts_today_and_totals() {
        let n = LogNormalizer::with_timezone(Utc);
        let events = n.expand(&sample()).unwrap();
        let view = dashboard(&n, &events, day("2025-09-01"), DEFAULT_RECENT_LIMIT);

        assert_eq!(view.summary.today_entries, 1);
        assert_eq!(view.summary.today_exits, 1);
        assert_eq!(view.summary.total_entries, 2);
        assert_eq!(view.recent[0].id, "2_entry");
    }

    #[test]
    fn student_view_shows_identity_fields() {
        let n = LogNormalizer::with_timezone(Utc);
        let events = n.expand(&sample()).unwrap();
        let me = StudentIdentity {
            student_id: Some("42".into()),
            name: Some("Asha Nair".into()),
            register_number: Some("2210451".into()),
        };

        let rows = student_logs(
            &n,
            &events,
            &me,
            Some(day("2025-09-01")),
            KindFilter::Only(EventKind::Exit),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Asha Nair");
        assert_eq!(rows[0].register_number, "2210451");
        assert_eq!(rows[0].id, "1_exit");
    }

    #[test]
    fn manage_logs_sorts_before_filtering() {
        let n = LogNormalizer::with_timezone(Utc);
        let events = n.expand(&sample()).unwrap();
        let rows = manage_logs(&n, &events, &LogFilter::new().on(day("2025-09-01")));
        let ids: Vec<_> = rows.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1_exit", "1_entry"]);
    }
}
