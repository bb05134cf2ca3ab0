//! Raw attendance rows as they come back from `/view_logs` and `/my_logs`.
//!
//! The backend is loose about casing, nulls and scalar types (ids and
//! register numbers show up both as numbers and as strings). Everything is
//! normalized here, once, so the rest of the crate only sees
//! `Option<String>` values that are either absent or non-blank.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttendanceRecord {
    #[serde(default, deserialize_with = "flex_text")]
    pub id: Option<String>,

    #[serde(default, alias = "studentId", deserialize_with = "flex_text")]
    pub student_id: Option<String>,

    #[serde(default, deserialize_with = "flex_text")]
    pub name: Option<String>,

    #[serde(
        default,
        rename = "register_no",
        alias = "registerNumber",
        alias = "register_number",
        deserialize_with = "flex_text"
    )]
    pub register_number: Option<String>,

    #[serde(default, alias = "entryTime", deserialize_with = "flex_text")]
    pub entry_time: Option<String>,

    #[serde(
        default,
        alias = "entry_Status",
        alias = "entryStatus",
        deserialize_with = "flex_text"
    )]
    pub entry_status: Option<String>,

    #[serde(default, alias = "exitTime", deserialize_with = "flex_text")]
    pub exit_time: Option<String>,

    #[serde(default, alias = "exitStatus", deserialize_with = "flex_text")]
    pub exit_status: Option<String>,
}

impl RawAttendanceRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_student(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_register_number(mut self, reg: impl Into<String>) -> Self {
        self.register_number = Some(reg.into());
        self
    }

    pub fn with_entry(mut self, time: impl Into<String>, status: Option<&str>) -> Self {
        self.entry_time = Some(time.into());
        self.entry_status = status.map(str::to_string);
        self
    }

    pub fn with_exit(mut self, time: impl Into<String>, status: Option<&str>) -> Self {
        self.exit_time = Some(time.into());
        self.exit_status = status.map(str::to_string);
        self
    }

    /// Entry timestamp, if present and not blank.
    pub fn entry(&self) -> Option<&str> {
        non_blank(self.entry_time.as_deref())
    }

    /// Exit timestamp, if present and not blank.
    pub fn exit(&self) -> Option<&str> {
        non_blank(self.exit_time.as_deref())
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

/// Accept any JSON scalar and keep its text form; `null` and blank strings
/// become `None`.
pub(crate) fn flex_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_text))
}

/// Same as `flex_text`, for form fields where absent means empty.
pub(crate) fn flex_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flex_text(deserializer)?.unwrap_or_default())
}

/// Any JSON scalar as text, keeping whitespace-only strings so validators
/// can reject them. Only `null` becomes `None`.
pub(crate) fn flex_text_verbatim<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        other => scalar_to_text(other),
    }))
}

fn scalar_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_mixed_casing() {
        let json = r#"{
            "id": 7,
            "student_id": 42,
            "register_no": 2210451,
            "entry_time": "2025-09-01T08:00:00Z",
            "entry_Status": "On Time",
            "exitTime": null
        }"#;

        let rec: RawAttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id.as_deref(), Some("7"));
        assert_eq!(rec.student_id.as_deref(), Some("42"));
        assert_eq!(rec.register_number.as_deref(), Some("2210451"));
        assert_eq!(rec.entry_status.as_deref(), Some("On Time"));
        assert_eq!(rec.exit_time, None);
        assert_eq!(rec.name, None);
    }

    #[test]
    fn blank_strings_count_as_absent() {
        let json = r#"{"id": "3", "entry_time": "", "exit_time": "   ", "name": ""}"#;
        let rec: RawAttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.entry_time, None);
        assert_eq!(rec.exit_time, None);
        assert_eq!(rec.name, None);
        assert_eq!(rec.entry().or(rec.exit()), None);
    }

    #[test]
    fn builder_blank_values_are_ignored_by_accessors() {
        let rec = RawAttendanceRecord::new("1").with_entry(" ", None);
        assert_eq!(rec.entry(), None);
    }
}
