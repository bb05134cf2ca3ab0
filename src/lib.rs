//! hostelog library root.
//! Exposes the log normalizer, the screen views, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

pub use crate::core::{DatePredicate, LogFilter, LogNormalizer};
pub use crate::models::{EventKind, KindFilter, LogEvent, LogSummary, RawAttendanceRecord};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command),
        Commands::Validate { .. } => cli::commands::validate::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg_path = config_path(cli.config.as_deref());

    let cfg = match &cli.command {
        // init must work even when the existing file is broken
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&cfg_path)?,
    };

    dispatch(&cli, &cfg, &cfg_path)
}

/// `--config` override, or the platform default location.
pub fn config_path(custom: Option<&str>) -> PathBuf {
    custom
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file)
}
