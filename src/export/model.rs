// src/export/model.rs

use crate::core::LogNormalizer;
use crate::models::LogEvent;
use chrono::TimeZone;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub id: String,
    pub kind: String,
    pub timestamp: String,
    /// Local calendar day, empty when the timestamp is unparseable.
    pub date: String,
    pub status: String,
    pub student_id: String,
    pub name: String,
    pub register_no: String,
    pub source_record_id: String,
}

impl EventExport {
    pub fn from_event<Tz: TimeZone>(normalizer: &LogNormalizer<Tz>, ev: &LogEvent) -> Self {
        Self {
            id: ev.id.clone(),
            kind: ev.kind.as_str().to_string(),
            timestamp: ev.timestamp.clone(),
            date: normalizer
                .local_day(ev)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            status: ev.status.clone(),
            student_id: ev.student_id.clone().unwrap_or_default(),
            name: ev.name.clone(),
            register_no: ev.register_number.clone(),
            source_record_id: ev.source_record_id.clone(),
        }
    }
}

pub(crate) fn to_rows<Tz: TimeZone>(
    normalizer: &LogNormalizer<Tz>,
    events: &[LogEvent],
) -> Vec<EventExport> {
    events
        .iter()
        .map(|e| EventExport::from_event(normalizer, e))
        .collect()
}
