use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::print_entries;
use crate::core::search::SearchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        today,
        format,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let today_str = date::today().format("%Y-%m-%d").to_string();
        let period = if *today {
            Some(today_str.as_str())
        } else {
            period.as_deref()
        };

        let conditions = SearchLogic::period_conditions(period)?;
        let (_, entries) = SearchLogic::run(&pool, &conditions)?;

        if entries.is_empty() {
            info("No entries for the selected period.");
            return Ok(());
        }

        print_entries(&entries, cfg, *format)?;
    }
    Ok(())
}
