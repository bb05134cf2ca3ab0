// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::EventExport;

use crate::core::LogNormalizer;
use crate::errors::AppResult;
use crate::models::LogEvent;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use chrono::TimeZone;
use clap::ValueEnum;
use std::io;
use std::path::Path;

/// Shared completion message for the exporters.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `events` (already sorted/filtered by the caller) to `file`.
    pub fn export<Tz: TimeZone>(
        normalizer: &LogNormalizer<Tz>,
        events: &[LogEvent],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        fs_utils::ensure_writable(&path, force, &mut io::stdin().lock())?;

        let rows = model::to_rows(normalizer, events);
        match format {
            ExportFormat::Csv => json_csv::export_csv(&rows, &path),
            ExportFormat::Json => json_csv::export_json(&rows, &path),
        }
    }
}
