//! ANSI color helpers for terminal output.
use crate::models::EventKind;
use ansi_term::Colour;

pub const GREY: Colour = Colour::Fixed(8);

/// Entry → green, Exit → red (the login/logout icons of the log cards).
pub fn colour_for_kind(kind: EventKind) -> Colour {
    match kind {
        EventKind::Entry => Colour::Green,
        EventKind::Exit => Colour::Red,
    }
}

/// "On Time" → green, "Unknown" → grey, any other label (e.g. "Late") → amber.
pub fn colour_for_status(status: &str) -> Colour {
    match status {
        "On Time" => Colour::Green,
        "Unknown" => GREY,
        _ => Colour::RGB(245, 158, 11),
    }
}

pub fn paint_kind(kind: EventKind) -> String {
    colour_for_kind(kind).paint(kind.as_str()).to_string()
}

pub fn paint_status(status: &str) -> String {
    if status.trim().is_empty() {
        return String::new();
    }
    colour_for_status(status).paint(status).to_string()
}

/// Configured label for a missing status, always grey.
pub fn paint_unknown_status(label: &str) -> String {
    if label.trim().is_empty() {
        return String::new();
    }
    GREY.paint(label).to_string()
}

/// Grey out placeholder values so they read as "missing".
pub fn paint_optional(value: &str) -> String {
    if value.trim().is_empty() || value == "Unknown" {
        GREY.paint(value).to_string()
    } else {
        value.to_string()
    }
}
