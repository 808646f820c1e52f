//! Entry listings shared by `list`, `search` and `export`.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Flat, serializable row for JSON / CSV output.
#[derive(Debug, Serialize)]
pub struct EntryRow<'a> {
    pub id: i64,
    pub date: String,
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub duration_minutes: i64,
    pub name: &'a str,
    pub notes: &'a str,
    pub color: &'a str,
    pub attributes: String,
}

impl<'a> From<&'a Entry> for EntryRow<'a> {
    fn from(e: &'a Entry) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            start_time: &e.start_time,
            end_time: &e.end_time,
            duration_minutes: e.duration_minutes(),
            name: &e.name,
            notes: &e.notes,
            color: &e.color,
            attributes: e.attribute_names().join(";"),
        }
    }
}

pub fn entries_table(entries: &[Entry], cfg: &Config) -> String {
    let mut columns = vec![
        Column::new("ID", 5),
        Column::new("DATE", 10),
        Column::new("START", 8),
        Column::new("END", 8),
        Column::new("DUR", 7),
        Column::new("NAME", 24),
    ];
    if cfg.show_attributes {
        columns.push(Column::new("ATTRIBUTES", 24));
    }

    let mut table = Table::new(columns);
    for e in entries {
        let mut row = vec![
            e.id.to_string(),
            e.date_str(),
            e.start_time.clone(),
            e.end_time.clone(),
            mins2readable(e.duration_minutes(), false, true),
            e.display_name(&cfg.default_entry_name).to_string(),
        ];
        if cfg.show_attributes {
            row.push(e.attribute_names().join(", "));
        }
        table.add_row(row);
    }

    table.render()
}

pub fn write_json<W: Write>(out: W, entries: &[Entry]) -> AppResult<()> {
    let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
    serde_json::to_writer_pretty(out, &rows)?;
    Ok(())
}

pub fn write_csv<W: Write>(out: W, entries: &[Entry]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for e in entries {
        wtr.serialize(EntryRow::from(e))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Print entries to stdout in the requested format.
pub fn print_entries(entries: &[Entry], cfg: &Config, format: OutputFormat) -> AppResult<()> {
    let stdout = std::io::stdout();
    match format {
        OutputFormat::Table => print!("{}", entries_table(entries, cfg)),
        OutputFormat::Json => {
            write_json(stdout.lock(), entries)?;
            println!();
        }
        OutputFormat::Csv => write_csv(stdout.lock(), entries)?,
    }
    Ok(())
}
