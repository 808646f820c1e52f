use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

pub const DEFAULT_ENTRY_COLOR: &str = "#4CAF50";
pub const DEFAULT_ATTRIBUTE_COLOR: &str = "#888888";

/// Keys every up-to-date configuration file is expected to carry.
pub const CONFIG_KEYS: [&str; 6] = [
    "database",
    "default_entry_color",
    "default_attribute_color",
    "default_entry_name",
    "show_attributes",
    "timeline_width",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_entry_color")]
    pub default_entry_color: String,
    #[serde(default = "default_attribute_color")]
    pub default_attribute_color: String,
    #[serde(default)]
    pub default_entry_name: String,
    #[serde(default = "default_show_attributes")]
    pub show_attributes: bool,
    #[serde(default = "default_timeline_width")]
    pub timeline_width: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_entry_color() -> String {
    DEFAULT_ENTRY_COLOR.to_string()
}
fn default_attribute_color() -> String {
    DEFAULT_ATTRIBUTE_COLOR.to_string()
}
fn default_show_attributes() -> bool {
    true
}
fn default_timeline_width() -> usize {
    48
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_entry_color: default_entry_color(),
            default_attribute_color: default_attribute_color(),
            default_entry_name: String::new(),
            show_attributes: default_show_attributes(),
            timeline_width: default_timeline_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimediary")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimediary")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimediary.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimediary.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            dir.join("rtimediary.sqlite")
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
