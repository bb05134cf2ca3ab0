//! Response envelopes of the logs endpoints.

use super::record::RawAttendanceRecord;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// `{status, logs, message}` as returned by `/view_logs` and `/my_logs`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogsResponse {
    pub status: ResponseStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logs: Vec<RawAttendanceRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LogsResponse {
    pub fn into_records(self) -> AppResult<Vec<RawAttendanceRecord>> {
        match self.status {
            ResponseStatus::Success => Ok(self.logs),
            ResponseStatus::Error => Err(AppError::Api(
                self.message.unwrap_or_else(|| "unspecified error".to_string()),
            )),
        }
    }
}

/// What a captured logs file may contain: the full envelope or just the rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LogsPayload {
    Envelope(LogsResponse),
    Bare(Vec<RawAttendanceRecord>),
}

impl LogsPayload {
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn into_records(self) -> AppResult<Vec<RawAttendanceRecord>> {
        match self {
            LogsPayload::Envelope(resp) => resp.into_records(),
            LogsPayload::Bare(rows) => Ok(rows),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RawAttendanceRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RawAttendanceRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_null_logs_are_empty() {
        for text in [r#"{"status":"success"}"#, r#"{"status":"success","logs":null}"#] {
            let rows = LogsPayload::from_json(text).unwrap().into_records().unwrap();
            assert!(rows.is_empty());
        }
    }

    #[test]
    fn error_envelope_becomes_api_error() {
        let text = r#"{"status":"error","message":"Student not found"}"#;
        let err = LogsPayload::from_json(text)
            .unwrap()
            .into_records()
            .unwrap_err();
        assert!(matches!(err, AppError::Api(ref m) if m == "Student not found"));
    }

    #[test]
    fn bare_array_is_accepted() {
        let text = r#"[{"id": 1, "entry_time": "2025-09-01T08:00:00Z"}]"#;
        let rows = LogsPayload::from_json(text).unwrap().into_records().unwrap();
        assert_eq!(rows.len(), 1);
    }
}
