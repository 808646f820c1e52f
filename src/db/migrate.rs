use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists: migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the migration `version` is already marked as applied.
fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Check if `table` exists.
fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Entries, attributes and their association.
fn migrate_create_diary_schema(conn: &Connection) -> Result<()> {
    let version = "20251020_0001_create_diary_schema";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL DEFAULT (DATE('now')),  -- YYYY-MM-DD
            start_time  TEXT NOT NULL DEFAULT '00:00:00',     -- HH:MM:SS
            end_time    TEXT NOT NULL DEFAULT '00:00:00',     -- HH:MM:SS
            name        TEXT NOT NULL DEFAULT '',
            notes       TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS attributes (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            name   TEXT NOT NULL UNIQUE COLLATE NOCASE,
            color  TEXT NOT NULL DEFAULT '#888888'
        );

        CREATE TABLE IF NOT EXISTS entry_attributes (
            entry_id      INTEGER NOT NULL REFERENCES entries(id) ON DELETE CASCADE,
            attribute_id  INTEGER NOT NULL REFERENCES attributes(id) ON DELETE CASCADE,
            PRIMARY KEY (entry_id, attribute_id)
        );
        "#,
    )?;

    mark_applied(conn, version, "Created entries, attributes and entry_attributes")?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Per-entry display color, introduced after the first schema.
fn migrate_add_entry_color(conn: &Connection) -> Result<()> {
    let version = "20251020_0002_add_entry_color";
    if is_applied(conn, version)? {
        return Ok(());
    }

    if !has_column(conn, "entries", "color")? {
        conn.execute(
            "ALTER TABLE entries ADD COLUMN color TEXT NOT NULL DEFAULT '#4CAF50';",
            [],
        )?;
    }

    mark_applied(conn, version, "Added color to entries")?;
    success(format!(
        "Migration applied: {} → added 'color' to entries table",
        version
    ));
    Ok(())
}

fn migrate_add_indexes(conn: &Connection) -> Result<()> {
    let version = "20251020_0003_add_indexes";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_entries_date_start ON entries(date, start_time);
        CREATE INDEX IF NOT EXISTS idx_entry_attributes_attribute ON entry_attributes(attribute_id);
        "#,
    )?;

    mark_applied(conn, version, "Added date and attribute indexes")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    migrate_create_diary_schema(conn)?;
    migrate_add_entry_color(conn)?;
    migrate_add_indexes(conn)?;

    Ok(())
}

/// True when the diary tables are present (used by `db --check`).
pub fn schema_ready(conn: &Connection) -> Result<bool> {
    Ok(table_exists(conn, "entries")? && table_exists(conn, "attributes")?)
}
