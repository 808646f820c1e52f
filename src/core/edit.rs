use crate::core::add::{EntryInput, warn_if_reversed};
use crate::db::attributes::{resolve_attribute_ids, set_attributes_for_entry};
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::{get_entry, update_entry};
use crate::errors::{AppError, AppResult};
use crate::models::entry::NewEntry;

pub struct EditLogic;

impl EditLogic {
    /// Change only the fields present in `input`. `clear_attributes` drops
    /// every attribute; a given attribute list replaces the current set.
    pub fn apply(
        pool: &mut DbPool,
        id: i64,
        input: EntryInput,
        clear_attributes: bool,
    ) -> AppResult<Vec<String>> {
        let current = get_entry(&pool.conn, id)?.ok_or(AppError::EntryNotFound(id))?;

        let attribute_ids = match &input.attributes {
            Some(names) => Some(resolve_attribute_ids(&pool.conn, names)?),
            None if clear_attributes => Some(Vec::new()),
            None => None,
        };

        let mut updated = NewEntry::from(&current);
        let mut changed = Vec::new();

        if let Some(d) = input.date {
            updated.date = d;
            changed.push("date");
        }
        if let Some(s) = input.start {
            updated.start_time = s;
            changed.push("start");
        }
        if let Some(e) = input.end {
            updated.end_time = e;
            changed.push("end");
        }
        if let Some(n) = input.name {
            updated.name = n;
            changed.push("name");
        }
        if let Some(n) = input.notes {
            updated.notes = n;
            changed.push("notes");
        }
        if let Some(c) = input.color {
            updated.color = c;
            changed.push("color");
        }

        warn_if_reversed(&updated.start_time, &updated.end_time);

        if updated != NewEntry::from(&current) {
            update_entry(&pool.conn, id, &updated)?;
        }

        if let Some(ids) = attribute_ids {
            set_attributes_for_entry(&mut pool.conn, id, &ids)?;
            changed.push("attributes");
        }

        let changed: Vec<String> = changed.into_iter().map(String::from).collect();

        if !changed.is_empty() {
            ttlog_lenient(
                &pool.conn,
                "edit",
                &format!("#{}", id),
                &format!("Changed {}", changed.join(", ")),
            );
        }

        Ok(changed)
    }
}
