use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::show::ShowLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if !*force {
            // fails early with EntryNotFound
            let entry = ShowLogic::load(&pool, *id)?;
            let prompt = format!(
                "Delete entry #{} '{}' ({} {}-{})? This action is irreversible.",
                entry.id,
                entry.display_name(&cfg.default_entry_name),
                entry.date_str(),
                entry.start_time,
                entry.end_time
            );

            if !ask_confirmation(&prompt)? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut pool, *id)?;
        success(format!("Entry #{} '{}' has been deleted.", removed.id, removed.name));
    }

    Ok(())
}
