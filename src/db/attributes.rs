//! Attribute storage and the entry ⇄ attribute association.

use crate::errors::{AppError, AppResult};
use crate::models::attribute::Attribute;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Result, Row, params};

fn map_attribute(row: &Row) -> Result<Attribute> {
    Ok(Attribute {
        id: row.get("id")?,
        name: row.get("name")?,
        color: row.get("color")?,
    })
}

/// Turn a UNIQUE violation on `attributes.name` into a readable error.
fn unique_name(e: rusqlite::Error, name: &str) -> AppError {
    match e.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => AppError::DuplicateAttribute(name.to_string()),
        _ => AppError::Db(e),
    }
}

pub fn insert_attribute(conn: &Connection, name: &str, color: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attributes (name, color) VALUES (?1, ?2)",
        params![name, color],
    )
    .map_err(|e| unique_name(e, name))?;
    Ok(conn.last_insert_rowid())
}

pub fn update_attribute(conn: &Connection, id: i64, name: &str, color: &str) -> AppResult<()> {
    let rows = conn
        .execute(
            "UPDATE attributes SET name = ?1, color = ?2 WHERE id = ?3",
            params![name, color, id],
        )
        .map_err(|e| unique_name(e, name))?;

    if rows == 0 {
        return Err(AppError::AttributeNotFound(format!("#{id}")));
    }
    Ok(())
}

/// Delete attribute `id`; it disappears from every entry (ON DELETE CASCADE).
pub fn delete_attribute(conn: &Connection, id: i64) -> AppResult<()> {
    let rows = conn.execute("DELETE FROM attributes WHERE id = ?1", [id])?;
    if rows == 0 {
        return Err(AppError::AttributeNotFound(format!("#{id}")));
    }
    Ok(())
}

pub fn get_attribute(conn: &Connection, id: i64) -> AppResult<Option<Attribute>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, color FROM attributes WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_attribute).optional()?)
}

/// All attributes ordered by name.
pub fn list_attributes(conn: &Connection) -> AppResult<Vec<Attribute>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, color FROM attributes ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_attribute)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Case-insensitive lookup by name.
pub fn find_attribute_by_name(conn: &Connection, name: &str) -> AppResult<Option<Attribute>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, color FROM attributes WHERE name = ?1 COLLATE NOCASE LIMIT 1",
    )?;
    Ok(stmt.query_row([name.trim()], map_attribute).optional()?)
}

/// Resolve every name to an attribute id, failing on the first unknown one.
pub fn resolve_attribute_ids(conn: &Connection, names: &[String]) -> AppResult<Vec<i64>> {
    names
        .iter()
        .map(|n| {
            find_attribute_by_name(conn, n)?
                .map(|a| a.id)
                .ok_or_else(|| AppError::AttributeNotFound(n.clone()))
        })
        .collect()
}

pub fn attributes_for_entry(conn: &Connection, entry_id: i64) -> AppResult<Vec<Attribute>> {
    let mut stmt = conn.prepare_cached(
        "SELECT a.id AS id, a.name AS name, a.color AS color
         FROM entry_attributes ea
         JOIN attributes a ON ea.attribute_id = a.id
         WHERE ea.entry_id = ?1
         ORDER BY a.name ASC",
    )?;
    let rows = stmt.query_map([entry_id], map_attribute)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Replace the whole attribute set of an entry. Repeated ids are stored once.
pub fn set_attributes_for_entry(
    conn: &mut Connection,
    entry_id: i64,
    attribute_ids: &[i64],
) -> AppResult<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM entry_attributes WHERE entry_id = ?1", [entry_id])?;
    {
        let mut ins = tx.prepare_cached(
            "INSERT OR IGNORE INTO entry_attributes (entry_id, attribute_id) VALUES (?1, ?2)",
        )?;
        for attribute_id in attribute_ids {
            ins.execute(params![entry_id, attribute_id])?;
        }
    }

    tx.commit()?;
    Ok(())
}

/// Number of entries carrying each attribute, keyed by attribute id.
pub fn usage_counts(conn: &Connection) -> AppResult<Vec<(i64, i64)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT attribute_id, COUNT(*) FROM entry_attributes GROUP BY attribute_id",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
