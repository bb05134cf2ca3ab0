//! Raw attendance rows → flat, sorted, filterable entry/exit timeline.
//!
//! Every operation is a pure function of its inputs: nothing is cached and
//! nothing is mutated, so callers may memoize on `(records, filter)` and
//! call from anywhere.

use crate::core::filter::LogFilter;
use crate::errors::{AppError, AppResult};
use crate::models::log_event::{UNKNOWN_REGISTER, UNKNOWN_STATUS};
use crate::models::{EventKind, LogEvent, LogSummary, RawAttendanceRecord};
use crate::utils::date::{local_day, parse_timestamp};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use std::cmp::Reverse;

/// Normalizer bound to the time zone that defines "local" calendar days.
#[derive(Debug, Clone)]
pub struct LogNormalizer<Tz: TimeZone = Local> {
    tz: Tz,
}

impl LogNormalizer<Local> {
    pub fn new() -> Self {
        Self { tz: Local }
    }
}

impl Default for LogNormalizer<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> LogNormalizer<Tz> {
    pub fn with_timezone(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// One event per present entry/exit timestamp, in input order.
    ///
    /// Fails only when a record has neither an id nor a timestamp from which
    /// one could be built.
    pub fn expand(&self, records: &[RawAttendanceRecord]) -> AppResult<Vec<LogEvent>> {
        let mut events = Vec::with_capacity(records.len() * 2);
        for (index, rec) in records.iter().enumerate() {
            expand_record(index, rec, &mut events)?;
        }
        Ok(events)
    }

    /// Like [`expand`](Self::expand), but malformed records are skipped and
    /// their errors handed back for the caller to report.
    pub fn expand_lossy(&self, records: &[RawAttendanceRecord]) -> (Vec<LogEvent>, Vec<AppError>) {
        let mut events = Vec::with_capacity(records.len() * 2);
        let mut errors = Vec::new();
        for (index, rec) in records.iter().enumerate() {
            if let Err(e) = expand_record(index, rec, &mut events) {
                errors.push(e);
            }
        }
        (events, errors)
    }

    /// Most recent first. Equal timestamps keep their input order;
    /// unparseable ones go last, also in input order.
    pub fn sort_descending(&self, events: &[LogEvent]) -> Vec<LogEvent> {
        let mut sorted = events.to_vec();
        // `None < Some(_)`, so reversing puts unparseable timestamps at the end.
        // sort_by_cached_key is stable.
        sorted.sort_by_cached_key(|e| Reverse(self.instant(e)));
        sorted
    }

    /// Events matching every part of `filter`, in their original order.
    pub fn filter(&self, events: &[LogEvent], filter: &LogFilter) -> Vec<LogEvent> {
        let needle = filter.needle();
        events
            .iter()
            .filter(|e| {
                filter
                    .date
                    .is_none_or(|pred| pred.matches(self.local_day(e)))
                    && filter.matches_fields(e, needle.as_deref())
            })
            .cloned()
            .collect()
    }

    /// Totals over all events plus the counts falling on `reference_date`.
    pub fn summarize(&self, events: &[LogEvent], reference_date: NaiveDate) -> LogSummary {
        events.iter().fold(LogSummary::default(), |mut acc, e| {
            let today = self.local_day(e) == Some(reference_date);
            match e.kind {
                EventKind::Entry => {
                    acc.total_entries += 1;
                    acc.today_entries += usize::from(today);
                }
                EventKind::Exit => {
                    acc.total_exits += 1;
                    acc.today_exits += usize::from(today);
                }
            }
            acc
        })
    }

    /// The `limit` most recent events.
    pub fn recent(&self, events: &[LogEvent], limit: usize) -> Vec<LogEvent> {
        let mut sorted = self.sort_descending(events);
        sorted.truncate(limit);
        sorted
    }

    /// Parsed timestamp of an event, `None` when unparseable.
    pub fn instant(&self, event: &LogEvent) -> Option<DateTime<Utc>> {
        parse_timestamp(&event.timestamp, &self.tz)
    }

    /// Local calendar day of an event, `None` when unparseable.
    pub fn local_day(&self, event: &LogEvent) -> Option<NaiveDate> {
        self.instant(event).map(|ts| local_day(&ts, &self.tz))
    }
}

fn expand_record(
    index: usize,
    rec: &RawAttendanceRecord,
    out: &mut Vec<LogEvent>,
) -> AppResult<()> {
    let entry = rec.entry();
    let exit = rec.exit();

    let record_id = match (&rec.id, entry.or(exit)) {
        (Some(id), _) => id.clone(),
        (None, Some(ts)) => format!("{}@{}", rec.student_id.as_deref().unwrap_or("?"), ts),
        (None, None) => {
            return Err(AppError::MalformedRecord {
                index,
                reason: "record has no id and no timestamp to derive one from".to_string(),
            });
        }
    };

    let name = rec
        .name
        .clone()
        .unwrap_or_else(|| LogEvent::placeholder_name(rec.student_id.as_deref()));
    let register_number = rec
        .register_number
        .clone()
        .unwrap_or_else(|| UNKNOWN_REGISTER.to_string());

    let sides = [
        (EventKind::Entry, entry, rec.entry_status.as_deref()),
        (EventKind::Exit, exit, rec.exit_status.as_deref()),
    ];

    for (kind, ts, status) in sides {
        let Some(ts) = ts else { continue };
        out.push(LogEvent {
            id: format!("{record_id}_{}", kind.id_suffix()),
            kind,
            timestamp: ts.to_string(),
            status: status.unwrap_or(UNKNOWN_STATUS).to_string(),
            student_id: rec.student_id.clone(),
            name: name.clone(),
            register_number: register_number.clone(),
            source_record_id: record_id.clone(),
        });
    }

    Ok(())
}
