pub mod event_kind;
pub mod log_event;
pub mod record;
pub mod response;
pub mod student;
pub mod summary;

pub use event_kind::{EventKind, KindFilter};
pub use log_event::LogEvent;
pub use record::RawAttendanceRecord;
pub use response::{LogsPayload, LogsResponse, ResponseStatus};
pub use student::{AdminLogin, StudentForm, StudentIdentity, StudentLogin};
pub use summary::LogSummary;
