use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventKind {
    Entry,
    Exit,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Entry => "Entry",
            EventKind::Exit => "Exit",
        }
    }

    /// Suffix appended to the record id when building the event id.
    pub fn id_suffix(&self) -> &'static str {
        match self {
            EventKind::Entry => "entry",
            EventKind::Exit => "exit",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entry" | "in" => Ok(EventKind::Entry),
            "exit" | "out" => Ok(EventKind::Exit),
            other => Err(AppError::InvalidEventKind(other.to_string())),
        }
    }
}

/// Kind selector used by the log browsers: `All` is the same as no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(EventKind),
}

impl KindFilter {
    pub fn matches(&self, kind: EventKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(k) => *k == kind,
        }
    }
}

impl From<Option<EventKind>> for KindFilter {
    fn from(kind: Option<EventKind>) -> Self {
        kind.map_or(KindFilter::All, KindFilter::Only)
    }
}

impl FromStr for KindFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(KindFilter::All);
        }
        s.parse::<EventKind>().map(KindFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_vocabularies() {
        assert_eq!("Entry".parse::<EventKind>().unwrap(), EventKind::Entry);
        assert_eq!("OUT".parse::<EventKind>().unwrap(), EventKind::Exit);
        assert!("sideways".parse::<EventKind>().is_err());
    }

    #[test]
    fn all_matches_every_kind() {
        let f: KindFilter = "all".parse().unwrap();
        assert!(f.matches(EventKind::Entry));
        assert!(f.matches(EventKind::Exit));

        let only_exit: KindFilter = "exit".parse().unwrap();
        assert!(!only_exit.matches(EventKind::Entry));
    }
}
