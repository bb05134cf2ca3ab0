//! Filter predicates applied by the log browsers.

use crate::models::{EventKind, KindFilter, LogEvent};
use chrono::NaiveDate;

/// Which calendar day(s) to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePredicate {
    /// Events whose local day is this date.
    On(NaiveDate),
    /// Events with a parseable timestamp on any other day.
    Except(NaiveDate),
}

impl DatePredicate {
    /// `day` is the event's local calendar day, `None` when its timestamp
    /// could not be parsed. Unparseable timestamps match neither variant.
    pub fn matches(&self, day: Option<NaiveDate>) -> bool {
        match (self, day) {
            (_, None) => false,
            (DatePredicate::On(d), Some(day)) => day == *d,
            (DatePredicate::Except(d), Some(day)) => day != *d,
        }
    }
}

/// `{date?, kind?, query?}`; every part that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub date: Option<DatePredicate>,
    pub kind: KindFilter,
    pub query: Option<String>,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(DatePredicate::On(date));
        self
    }

    pub fn except(mut self, date: NaiveDate) -> Self {
        self.date = Some(DatePredicate::Except(date));
        self
    }

    pub fn kind(mut self, kind: impl Into<KindFilter>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn only(self, kind: EventKind) -> Self {
        self.kind(KindFilter::Only(kind))
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Whether the filter lets everything through.
    pub fn is_identity(&self) -> bool {
        self.date.is_none() && self.kind == KindFilter::All && self.needle().is_none()
    }

    /// Lowercased search text, `None` when there is nothing to search for.
    pub(crate) fn needle(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Kind and query part of the predicate. The date part needs the
    /// normalizer's time zone and is checked there.
    pub(crate) fn matches_fields(&self, event: &LogEvent, needle: Option<&str>) -> bool {
        self.kind.matches(event.kind) && needle.is_none_or(|n| matches_query(event, n))
    }
}

/// Case-insensitive substring search on name, register number and student id.
fn matches_query(event: &LogEvent, needle: &str) -> bool {
    event.name.to_lowercase().contains(needle)
        || event.register_number.to_lowercase().contains(needle)
        || event
            .student_id
            .as_deref()
            .is_some_and(|id| id.to_lowercase().contains(needle))
}
