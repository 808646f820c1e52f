use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    /// Report keys missing from the file; the running defaults fill them in.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!("No configuration file at {}", path.display()));
            return Ok(Vec::new());
        }

        let missing = migrate::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file contains every known key.");
        } else {
            warning(format!(
                "Missing keys (defaults in use): {}",
                missing.join(", ")
            ));
            info("Run `rtimediary config --migrate` to add them.");
        }
        Ok(missing)
    }

    pub fn migrate(conn: &rusqlite::Connection, cfg: &Config) -> AppResult<Vec<String>> {
        migrate::run_config_migration(conn, cfg)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let fallback = if cfg!(target_os = "windows") {
            "notepad"
        } else {
            "nano"
        };

        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| fallback.into());

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot launch '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
        }

        Ok(())
    }
}
