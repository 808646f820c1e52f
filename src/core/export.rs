use crate::core::render::{OutputFormat, write_csv, write_json};
use crate::core::search::SearchLogic;
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export entries, with their attribute names, to `file`.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period such as `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD` or `start:end` of those
    ///
    /// Returns the number of exported entries.
    pub fn export(
        pool: &mut DbPool,
        format: OutputFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        if format == OutputFormat::Table {
            return Err(AppError::Export(
                "Unsupported format 'table'. Use one of: csv, json".into(),
            ));
        }

        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let conditions = match range {
            None => Vec::new(),
            Some(r) => SearchLogic::period_conditions(Some(r))?,
        };

        let (_, mut entries) = SearchLogic::run(pool, &conditions)?;

        if entries.is_empty() {
            warning("No entries found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        entries.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.start_time.cmp(&b.start_time))
        });

        let mut out = BufWriter::new(File::create(path)?);
        match format {
            OutputFormat::Csv => write_csv(&mut out, &entries)?,
            _ => write_json(&mut out, &entries)?,
        }
        out.flush()?;

        success(format!(
            "Exported {} entries to {}",
            entries.len(),
            path.display()
        ));

        ttlog_lenient(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} entries", entries.len()),
        );

        Ok(entries.len())
    }
}

/// Controlla se il file può essere sovrascritto.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    eprint!(
        "⚠️  File '{}' already exists. Overwrite? [y/N]: ",
        path.display()
    );
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        Ok(())
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".into(),
        ))
    }
}
