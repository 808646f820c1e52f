use crate::cli::commands::add::entry_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        fields,
        clear_attrs,
    } = cmd
    {
        let input = entry_input(fields)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let changed = EditLogic::apply(&mut pool, *id, input, *clear_attrs)?;

        if changed.is_empty() {
            info(format!("Nothing to change for entry #{}.", id));
        } else {
            success(format!("Entry #{} updated: {}.", id, changed.join(", ")));
        }
    }

    Ok(())
}
