use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day::DayLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: day, json } = cmd {
        let d = match day {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let entries = DayLogic::load(&pool, &d)?;

        if *json {
            DayLogic::print_json(&d, &entries)?;
        } else {
            DayLogic::print(&d, &entries, cfg);
        }
    }
    Ok(())
}
