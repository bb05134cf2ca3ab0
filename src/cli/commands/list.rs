use crate::cli::commands::filter_from_args;
use crate::cli::parser::{Commands, StudentArgs};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::{DatePredicate, LogFilter, LogNormalizer, views};
use crate::errors::AppResult;
use crate::models::{KindFilter, StudentIdentity};
use crate::ui::messages::{header, info, warning};
use crate::ui::render::events_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        file,
        filter,
        student,
    } = cmd
    {
        let normalizer = LogNormalizer::new();
        let events = Core::load_events(&normalizer, file)?;
        let log_filter = filter_from_args(filter);
        let identity = identity_from_args(student);

        // student view: own rows only, no search and no student columns
        let admin_view = identity.is_empty();
        let rows = if admin_view {
            views::manage_logs(&normalizer, &events, &log_filter)
        } else {
            if log_filter.needle().is_some() {
                warning("--search is ignored in the student view");
            }
            let day = match log_filter.date {
                Some(DatePredicate::On(d)) => Some(d),
                _ => None,
            };
            views::student_logs(&normalizer, &events, &identity, day, log_filter.kind)
        };

        header(describe(filter.today, &log_filter));
        if rows.is_empty() {
            info("No logs found for the selected filters.");
        } else {
            print!("{}", events_table(&normalizer, &rows, cfg, admin_view));
            println!("\n{} of {} events", rows.len(), events.len());
        }
    }
    Ok(())
}

fn identity_from_args(args: &StudentArgs) -> StudentIdentity {
    StudentIdentity {
        student_id: args.student_id.clone(),
        name: args.student_name.clone(),
        register_number: args.student_reg.clone(),
    }
}

fn describe(today: bool, filter: &LogFilter) -> String {
    let day = match filter.date {
        _ if today => "today".to_string(),
        Some(DatePredicate::On(d)) => d.to_string(),
        _ => "all days".to_string(),
    };
    let kind = match filter.kind {
        KindFilter::All => "All".to_string(),
        KindFilter::Only(k) => k.to_string(),
    };
    format!("Logs: {day} | {kind}")
}
