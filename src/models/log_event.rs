use super::event_kind::EventKind;
use super::student::StudentIdentity;
use serde::Serialize;

/// Status label used when the source row carries none.
pub const UNKNOWN_STATUS: &str = "Unknown";
/// Register number placeholder.
pub const UNKNOWN_REGISTER: &str = "Unknown";

/// One entry or exit, derived from a raw attendance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    pub id: String,
    pub kind: EventKind,
    /// Source timestamp, verbatim.
    pub timestamp: String,
    pub status: String,
    pub student_id: Option<String>,
    pub name: String,
    pub register_number: String,
    pub source_record_id: String,
}

impl LogEvent {
    /// Placeholder name for rows without one.
    pub fn placeholder_name(student_id: Option<&str>) -> String {
        match student_id {
            Some(id) => format!("Student {id}"),
            None => "Student".to_string(),
        }
    }

    pub fn has_known_status(&self) -> bool {
        self.status != UNKNOWN_STATUS
    }

    /// Replace the display fields with those of the logged-in student.
    /// Fields missing from the identity are left untouched.
    pub fn with_identity(mut self, identity: &StudentIdentity) -> Self {
        if let Some(name) = &identity.name {
            self.name = name.clone();
        }
        if let Some(reg) = &identity.register_number {
            self.register_number = reg.clone();
        }
        if let Some(id) = &identity.student_id {
            self.student_id = Some(id.clone());
        }
        self
    }
}
