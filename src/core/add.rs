use crate::config::Config;
use crate::db::attributes::{resolve_attribute_ids, set_attributes_for_entry};
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::AppResult;
use crate::models::entry::NewEntry;
use crate::ui::messages::warning;
use crate::utils::date::today;
use crate::utils::time::minutes_of_day;
use chrono::NaiveDate;

/// Already validated values coming from `add` / `edit`.
/// `None` means "not given on the command line".
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub date: Option<NaiveDate>,
    pub start: Option<String>, // HH:MM:SS
    pub end: Option<String>,   // HH:MM:SS
    pub name: Option<String>,
    pub notes: Option<String>,
    pub color: Option<String>, // #RRGGBB
    pub attributes: Option<Vec<String>>,
}

/// Entries are same-day spans; a later start than end is stored as given
/// but the user is told the timeline will read it as crossing midnight.
pub(crate) fn warn_if_reversed(start: &str, end: &str) {
    if minutes_of_day(end) < minutes_of_day(start) {
        warning(format!(
            "End {} is before start {}: the day timeline will treat it as running past midnight.",
            end, start
        ));
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(pool: &mut DbPool, cfg: &Config, input: EntryInput) -> AppResult<i64> {
        // Unknown attribute names abort before anything is written
        let attribute_ids = match &input.attributes {
            Some(names) => resolve_attribute_ids(&pool.conn, names)?,
            None => Vec::new(),
        };

        let entry = NewEntry {
            date: input.date.unwrap_or_else(today),
            start_time: input.start.unwrap_or_else(|| "00:00:00".to_string()),
            end_time: input.end.unwrap_or_else(|| "00:00:00".to_string()),
            name: input
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| cfg.default_entry_name.clone()),
            notes: input.notes.unwrap_or_default(),
            color: input
                .color
                .unwrap_or_else(|| cfg.default_entry_color.clone()),
        };

        warn_if_reversed(&entry.start_time, &entry.end_time);

        let id = insert_entry(&pool.conn, &entry)?;

        if !attribute_ids.is_empty() {
            set_attributes_for_entry(&mut pool.conn, id, &attribute_ids)?;
        }

        ttlog_lenient(
            &pool.conn,
            "add",
            &format!("#{} {}", id, entry.date),
            &format!(
                "Added '{}' {}-{}",
                entry.name, entry.start_time, entry.end_time
            ),
        );

        Ok(id)
    }
}
