use crate::core::search::CompiledQuery;
use crate::db::attributes::attributes_for_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, NewEntry};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ENTRY_COLUMNS: &str = "id, date, start_time, end_time, name, notes, color";

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        date,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        name: row.get("name")?,
        notes: row.get("notes")?,
        color: row.get("color")?,
        attributes: Vec::new(),
    })
}

/// Fill `attributes` of every entry.
pub fn attach_attributes(conn: &Connection, entries: &mut [Entry]) -> AppResult<()> {
    for e in entries.iter_mut() {
        e.attributes = attributes_for_entry(conn, e.id)?;
    }
    Ok(())
}

pub fn insert_entry(conn: &Connection, e: &NewEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (date, start_time, end_time, name, notes, color)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            e.date.format("%Y-%m-%d").to_string(),
            e.start_time,
            e.end_time,
            e.name,
            e.notes,
            e.color,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite all fields of entry `id`.
pub fn update_entry(conn: &Connection, id: i64, e: &NewEntry) -> AppResult<()> {
    let rows = conn.execute(
        "UPDATE entries
         SET date = ?1, start_time = ?2, end_time = ?3,
             name = ?4, notes = ?5, color = ?6
         WHERE id = ?7",
        params![
            e.date.format("%Y-%m-%d").to_string(),
            e.start_time,
            e.end_time,
            e.name,
            e.notes,
            e.color,
            id,
        ],
    )?;

    if rows == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

/// Delete entry `id`; its attribute links go with it (ON DELETE CASCADE).
pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let rows = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    if rows == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

pub fn get_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let mut stmt =
        conn.prepare_cached(&format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"))?;
    let entry = stmt.query_row([id], map_row).optional()?;

    match entry {
        Some(mut e) => {
            e.attributes = attributes_for_entry(conn, e.id)?;
            Ok(Some(e))
        }
        None => Ok(None),
    }
}

/// All entries, newest day first, each day in start order.
pub fn list_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries ORDER BY date DESC, start_time ASC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    attach_attributes(conn, &mut out)?;
    Ok(out)
}

/// Entries of one day in start order.
pub fn list_entries_for_day(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE date = ?1
         ORDER BY start_time ASC, id ASC"
    ))?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    attach_attributes(conn, &mut out)?;
    Ok(out)
}

/// Run a compiled search, binding its parameters in order.
pub fn execute_query(conn: &Connection, query: &CompiledQuery) -> AppResult<Vec<Entry>> {
    let sql = query.to_sql();
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map(query.param_refs().as_slice(), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    attach_attributes(conn, &mut out)?;
    Ok(out)
}

/// Number of entries and the first/last day holding one.
pub fn entry_span(conn: &Connection) -> Result<(i64, Option<String>, Option<String>)> {
    conn.query_row(
        "SELECT COUNT(*), MIN(date), MAX(date) FROM entries",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )
}
