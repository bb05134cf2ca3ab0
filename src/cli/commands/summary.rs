use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::{LogNormalizer, views};
use crate::errors::AppResult;
use crate::ui::render;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        file,
        date: day,
        limit,
        json,
    } = cmd
    {
        let normalizer = LogNormalizer::new();
        let events = Core::load_events(&normalizer, file)?;
        let reference = day.unwrap_or_else(date::today);
        let view = views::dashboard(
            &normalizer,
            &events,
            reference,
            limit.unwrap_or(cfg.recent_limit),
        );

        if *json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            print!("{}", render::dashboard(&normalizer, &view, cfg));
        }
    }
    Ok(())
}
