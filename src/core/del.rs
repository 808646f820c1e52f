use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entry, get_entry};
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entry and return what was removed.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Entry> {
        let entry = get_entry(&pool.conn, id)?.ok_or(AppError::EntryNotFound(id))?;

        delete_entry(&pool.conn, id)?;

        ttlog_lenient(
            &pool.conn,
            "del",
            &format!("#{} {}", id, entry.date),
            &format!(
                "Deleted '{}' {}-{}",
                entry.name, entry.start_time, entry.end_time
            ),
        );

        Ok(entry)
    }
}
