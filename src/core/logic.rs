use crate::core::normalizer::LogNormalizer;
use crate::errors::AppResult;
use crate::models::{LogEvent, LogsPayload, RawAttendanceRecord};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::TimeZone;
use std::fs;

pub struct Core;

impl Core {
    /// Read a captured `/view_logs` or `/my_logs` response (or a bare array
    /// of rows) from disk.
    pub fn load_records(path: &str) -> AppResult<Vec<RawAttendanceRecord>> {
        let content = fs::read_to_string(expand_tilde(path))?;
        LogsPayload::from_json(&content)?.into_records()
    }

    /// Load and expand a logs file. Malformed rows are reported and skipped.
    pub fn load_events<Tz: TimeZone>(
        normalizer: &LogNormalizer<Tz>,
        path: &str,
    ) -> AppResult<Vec<LogEvent>> {
        let records = Self::load_records(path)?;
        let (events, skipped) = normalizer.expand_lossy(&records);
        for e in &skipped {
            warning(format!("Skipping record: {e}"));
        }
        Ok(events)
    }
}
