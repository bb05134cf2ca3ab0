use crate::errors::AppError;
use crate::export::ExportFormat;
use crate::models::KindFilter;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for hostelog
#[derive(Parser)]
#[command(
    name = "hostelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hostel entry/exit logs: expand, filter and summarize attendance records",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_day(s: &str) -> Result<NaiveDate, AppError> {
    crate::utils::date::parse_date(s)
        .ok_or_else(|| AppError::InvalidDate(format!("expected YYYY-MM-DD, got '{s}'")))
}

/// Filters shared by `list` and `export`.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Only events on this day (YYYY-MM-DD, local time)
    #[arg(long, value_parser = parse_day, conflicts_with = "today")]
    pub date: Option<NaiveDate>,

    /// Only events of today
    #[arg(long)]
    pub today: bool,

    /// entry, exit or all
    #[arg(long, default_value = "all")]
    pub kind: KindFilter,

    /// Case-insensitive search on name, register number or student id
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

/// Logged-in student; when any field is given `list` shows the student view.
#[derive(Args, Clone, Debug, Default)]
pub struct StudentArgs {
    #[arg(long = "student-id")]
    pub student_id: Option<String>,

    #[arg(long = "student-name")]
    pub student_name: Option<String>,

    #[arg(long = "student-reg")]
    pub student_reg: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormKind {
    /// Add/edit student form
    Student,
    /// Student login form
    StudentLogin,
    /// Administrator login form
    AdminLogin,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Browse logs from a captured /view_logs or /my_logs response
    List {
        /// JSON file with the logs response (or a bare array of records)
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        student: StudentArgs,
    },

    /// Dashboard: today's counts, totals and the most recent events
    Summary {
        file: String,

        /// Reference day instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,

        /// Number of recent events (default from config)
        #[arg(long)]
        limit: Option<usize>,

        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the filtered, sorted events
    Export {
        file: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'o', value_name = "FILE")]
        output: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Validate a form (JSON) before it is submitted
    Validate {
        #[arg(value_enum)]
        form: FormKind,

        file: String,
    },
}
