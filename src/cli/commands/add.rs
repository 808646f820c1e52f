use crate::cli::parser::{Commands, EntryArgs};
use crate::config::Config;
use crate::core::add::{AddLogic, EntryInput};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::colors::parse_optional_color;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Validate the raw command line fields shared by `add` and `edit`.
pub(crate) fn entry_input(args: &EntryArgs) -> AppResult<EntryInput> {
    let date = match &args.date {
        Some(d) => Some(date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
        None => None,
    };

    Ok(EntryInput {
        date,
        start: parse_optional_time(args.start.as_ref())?,
        end: parse_optional_time(args.end.as_ref())?,
        name: args.name.clone(),
        notes: args.notes.clone(),
        color: parse_optional_color(args.color.as_ref())?,
        attributes: if args.attrs.is_empty() {
            None
        } else {
            Some(args.attrs.clone())
        },
    })
}

/// Add a diary entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields } = cmd {
        let input = entry_input(fields)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let id = AddLogic::apply(&mut pool, cfg, input)?;

        success(format!("Entry #{} added.", id));
    }

    Ok(())
}
