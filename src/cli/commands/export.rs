use crate::cli::commands::filter_from_args;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::core::{LogNormalizer, views};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        output,
        filter,
        force,
    } = cmd
    {
        let normalizer = LogNormalizer::new();
        let events = Core::load_events(&normalizer, file)?;
        let rows = views::manage_logs(&normalizer, &events, &filter_from_args(filter));

        info(format!("{} events selected ({})", rows.len(), format.as_str()));
        ExportLogic::export(&normalizer, &rows, *format, output, *force)?;
    }
    Ok(())
}
