//! Text rendering of log rows and the dashboard.

use crate::config::Config;
use crate::core::LogNormalizer;
use crate::core::views::DashboardView;
use crate::models::LogEvent;
use crate::utils::colors::{paint_kind, paint_optional, paint_status, paint_unknown_status};
use crate::utils::formatting::{bold, format_event_date, format_event_time};
use crate::utils::table::Table;
use chrono::TimeZone;

/// Log rows as a table. `show_student_info` adds name and register number
/// columns (administrator screens); the student's own view omits them.
pub fn events_table<Tz: TimeZone>(
    normalizer: &LogNormalizer<Tz>,
    events: &[LogEvent],
    cfg: &Config,
    show_student_info: bool,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut headers = vec!["Date", "Time", "Kind"];
    if show_student_info {
        headers.extend(["Name", "Reg No"]);
    }
    headers.push("Status");

    let mut table = Table::new(headers);
    for ev in events {
        let mut row = vec![
            format_event_date(normalizer, ev, &cfg.date_format),
            format_event_time(normalizer, ev, &cfg.time_format),
            paint_kind(ev.kind),
        ];
        if show_student_info {
            row.push(ev.name.clone());
            row.push(paint_optional(&ev.register_number));
        }
        let status = if ev.has_known_status() {
            paint_status(&ev.status)
        } else {
            paint_unknown_status(&cfg.unknown_status)
        };
        row.push(status);
        table.add_row(row);
    }
    table.render(&cfg.separator_char)
}

pub fn dashboard<Tz: TimeZone>(
    normalizer: &LogNormalizer<Tz>,
    view: &DashboardView,
    cfg: &Config,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let s = &view.summary;
    let mut out = String::new();
    out.push_str(&format!("{}\n", bold(&view.date.format("%A, %-d %b %Y").to_string())));
    out.push_str(&format!(
        "Today:  {} entries | {} exits\n",
        s.today_entries, s.today_exits
    ));
    out.push_str(&format!(
        "Total:  {} entries | {} exits\n\n",
        s.total_entries, s.total_exits
    ));

    if view.recent.is_empty() {
        out.push_str("No recent activity.\n");
    } else {
        out.push_str(&format!("Recent activity ({}):\n", view.recent.len()));
        out.push_str(&events_table(normalizer, &view.recent, cfg, true));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::views;
    use crate::models::RawAttendanceRecord;
    use crate::utils::table::strip_ansi;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn missing_status_uses_configured_label() {
        let n = LogNormalizer::with_timezone(Utc);
        let events = n
            .expand(&[RawAttendanceRecord::new("1")
                .with_name("Asha")
                .with_register_number("2210451")
                .with_entry("2025-09-01T08:00:00Z", None)])
            .unwrap();

        let default = strip_ansi(&events_table(&n, &events, &Config::default(), true));
        assert_eq!(default.matches("Unknown").count(), 1);

        let dashed = Config {
            unknown_status: "n/a".to_string(),
            ..Config::default()
        };
        let text = strip_ansi(&events_table(&n, &events, &dashed, true));
        assert!(text.contains("n/a"));
        assert!(!text.contains("Unknown"));

        let blank = Config {
            unknown_status: String::new(),
            ..Config::default()
        };
        let text = strip_ansi(&events_table(&n, &events, &blank, true));
        assert!(!text.contains("Unknown"));
    }

    #[test]
    fn dashboard_lists_counts() {
        let n = LogNormalizer::with_timezone(Utc);
        let events = n
            .expand(&[RawAttendanceRecord::new("1")
                .with_entry("2025-09-01T08:00:00Z", Some("On Time"))
                .with_exit("2025-09-01T18:00:00Z", Some("Late"))])
            .unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let view = views::dashboard(&n, &events, day, 5);

        let text = strip_ansi(&dashboard(&n, &view, &Config::default()));
        assert!(text.contains("Today:  1 entries | 1 exits"));
        assert!(text.contains("Recent activity (2):"));
    }
}
