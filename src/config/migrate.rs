use super::{CONFIG_KEYS, Config};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use rusqlite::Connection;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Read the YAML mapping stored at `path`.
fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// Return the known configuration keys that are absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;

    Ok(CONFIG_KEYS
        .iter()
        .filter(|k| !map.contains_key(**k))
        .map(|k| k.to_string())
        .collect())
}

/// Add every missing key to the config file at `path`, using the value the
/// running configuration already resolved for it (file value or default).
/// Returns the keys that were added.
pub fn add_missing_keys(path: &Path, cfg: &Config) -> AppResult<Vec<String>> {
    let mut map = read_mapping(path)?;
    let resolved = match serde_yaml::to_value(cfg)? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("config did not serialize to a mapping".into())),
    };

    let mut added = Vec::new();
    for key in CONFIG_KEYS {
        if map.contains_key(key) {
            continue;
        }
        if let Some(v) = resolved.get(key) {
            map.insert(Value::String(key.to_string()), v.clone());
            added.push(key.to_string());
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}

/// Bring the configuration file up to date and record the change in the
/// internal `log` table. A missing config file is not an error: there is
/// nothing to migrate.
pub fn run_config_migration(conn: &Connection, cfg: &Config) -> AppResult<Vec<String>> {
    let path = Config::config_file();
    if !path.exists() {
        info(format!("No configuration file at {}", path.display()));
        return Ok(Vec::new());
    }

    let added = add_missing_keys(&path, cfg)?;

    if added.is_empty() {
        info("Configuration file already up to date.");
        return Ok(added);
    }

    crate::db::log::ttlog(
        conn,
        "migration_applied",
        &format!("config:{}", added.join(",")),
        "Added missing configuration keys",
    )?;

    success(format!("Added missing configuration keys: {}", added.join(", ")));

    Ok(added)
}
