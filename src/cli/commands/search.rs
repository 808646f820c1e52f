use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::{OutputFormat, print_entries};
use crate::core::search::SearchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search {
        conditions,
        file,
        format,
        show_sql,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        // file conditions first, then the command line ones, in order
        let mut all = match file {
            Some(path) => SearchLogic::load_condition_file(path)?,
            None => Vec::new(),
        };
        all.extend(SearchLogic::parse_conditions(&pool, conditions));

        let (query, entries) = SearchLogic::run(&pool, &all)?;

        if *show_sql {
            println!("{GREY}{}{RESET}", query.to_sql());
            println!("{GREY}params: {:?}{RESET}", query.params);
        }

        if entries.is_empty() && *format == OutputFormat::Table {
            info("No entries match the given conditions.");
            return Ok(());
        }

        print_entries(&entries, cfg, *format)?;
    }
    Ok(())
}
