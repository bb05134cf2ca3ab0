use serde::Serialize;

/// Counts shown on the dashboard cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    pub today_entries: usize,
    pub today_exits: usize,
    pub total_entries: usize,
    pub total_exits: usize,
}
