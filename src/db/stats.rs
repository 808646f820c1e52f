//! Figures shown by `db --info`.

use crate::db::queries::entry_span;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_date;
use rusqlite::Connection;
use std::fs;

#[derive(Debug, Clone, PartialEq)]
pub struct DbInfo {
    pub path: String,
    pub size_bytes: u64,
    pub entries: i64,
    pub attributes: i64,
    pub links: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

impl DbInfo {
    pub fn collect(conn: &Connection, db_path: &str) -> AppResult<Self> {
        let (entries, first_date, last_date) = entry_span(conn)?;
        let count = |table: &str| -> rusqlite::Result<i64> {
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        };

        Ok(Self {
            path: db_path.to_string(),
            size_bytes: fs::metadata(db_path).map(|m| m.len()).unwrap_or(0),
            entries,
            attributes: count("attributes")?,
            links: count("entry_attributes")?,
            first_date,
            last_date,
        })
    }

    /// Entries per calendar day between the first and last entry, both included.
    pub fn average_per_day(&self) -> Option<f64> {
        let first = parse_date(self.first_date.as_deref()?)?;
        let last = parse_date(self.last_date.as_deref()?)?;
        let days = (last - first).num_days() + 1;
        (days > 0).then(|| self.entries as f64 / days as f64)
    }

    pub fn print(&self) {
        let or_dash = |d: &Option<String>| {
            d.clone()
                .unwrap_or_else(|| format!("{GREY}--{RESET}"))
        };

        println!();
        println!("{CYAN}• File:{RESET} {YELLOW}{}{RESET}", self.path);
        println!(
            "{CYAN}• Size:{RESET} {:.2} MB",
            self.size_bytes as f64 / (1024.0 * 1024.0)
        );
        println!("{CYAN}• Total entries:{RESET} {GREEN}{}{RESET}", self.entries);
        println!(
            "{CYAN}• Attributes:{RESET} {} ({} links)",
            self.attributes, self.links
        );
        println!("{CYAN}• Date range:{RESET}");
        println!("    from: {}", or_dash(&self.first_date));
        println!("    to:   {}", or_dash(&self.last_date));

        if let Some(avg) = self.average_per_day() {
            println!("{CYAN}• Average entries/day:{RESET} {:.2}", avg);
        }
        println!();
    }
}
