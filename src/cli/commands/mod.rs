pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod summary;
pub mod validate;

use crate::cli::parser::FilterArgs;
use crate::core::LogFilter;
use crate::utils::date;

/// Build the log filter from the shared CLI flags.
pub(crate) fn filter_from_args(args: &FilterArgs) -> LogFilter {
    let mut filter = LogFilter::new().kind(args.kind);
    if args.today {
        filter = filter.on(date::today());
    } else if let Some(d) = args.date {
        filter = filter.on(d);
    }
    if let Some(q) = &args.search {
        filter = filter.query(q.clone());
    }
    filter
}
