use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::migrate::schema_ready;
use crate::db::pool::DbPool;
use crate::db::stats::DbInfo;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};
use rusqlite::Connection;

/// Problems reported by SQLite's integrity and foreign key checks, plus a
/// missing diary schema.
fn integrity_problems(conn: &Connection) -> AppResult<Vec<String>> {
    let mut problems = Vec::new();

    let mut stmt = conn.prepare("PRAGMA integrity_check")?;
    for row in stmt.query_map([], |r| r.get::<_, String>(0))? {
        let row = row?;
        if row != "ok" {
            problems.push(row);
        }
    }

    let mut stmt = conn.prepare("PRAGMA foreign_key_check")?;
    for row in stmt.query_map([], |r| {
        Ok(format!(
            "dangling reference in {} (rowid {:?}) to {}",
            r.get::<_, String>(0)?,
            r.get::<_, Option<i64>>(1)?,
            r.get::<_, String>(2)?
        ))
    })? {
        problems.push(row?);
    }

    if !schema_ready(conn)? {
        problems.push("diary tables missing: run `rtimediary db --migrate`".into());
    }

    Ok(problems)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            info("Running migrations…");
            init_db(&pool.conn)?;
            success("Migration completed.");
        }

        if *show_info {
            DbInfo::collect(&pool.conn, &cfg.database)?.print();
        }

        if *check {
            info("Running integrity check…");
            let problems = integrity_problems(&pool.conn)?;
            if problems.is_empty() {
                success("Integrity check passed.");
            } else {
                for p in &problems {
                    error(p);
                }
            }
        }

        if *vacuum {
            info("Running VACUUM…");
            pool.conn.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}
