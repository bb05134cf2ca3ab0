//! Formatting utilities used for CLI and export outputs.

use crate::core::LogNormalizer;
use crate::models::LogEvent;
use chrono::TimeZone;
use std::fmt::Write;

pub const INVALID_TIME: &str = "Invalid Time";
pub const INVALID_DATE: &str = "Invalid Date";

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Event time in the normalizer's zone, or "Invalid Time".
pub fn format_event_time<Tz: TimeZone>(
    normalizer: &LogNormalizer<Tz>,
    event: &LogEvent,
    fmt: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format_instant(normalizer, event, fmt).unwrap_or_else(|| INVALID_TIME.to_string())
}

/// Event date in the normalizer's zone, or "Invalid Date".
pub fn format_event_date<Tz: TimeZone>(
    normalizer: &LogNormalizer<Tz>,
    event: &LogEvent,
    fmt: &str,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format_instant(normalizer, event, fmt).unwrap_or_else(|| INVALID_DATE.to_string())
}

fn format_instant<Tz: TimeZone>(
    normalizer: &LogNormalizer<Tz>,
    event: &LogEvent,
    fmt: &str,
) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    let local = normalizer.instant(event)?.with_timezone(normalizer.timezone());
    let mut out = String::new();
    // a bad user-supplied format string surfaces as fmt::Error
    write!(out, "{}", local.format(fmt)).ok()?;
    Some(out)
}

/// Separator line of `width` copies of `ch` (config `separator_char`).
pub fn separator(ch: &str, width: usize) -> String {
    let ch = if ch.is_empty() { "-" } else { ch };
    ch.repeat(width)
}
