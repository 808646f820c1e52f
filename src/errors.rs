//! Crate-wide error type.
//! db, core, cli and utils all return `AppResult` so that `main` has a
//! single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // storage
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("No entry with id {0}")]
    EntryNotFound(i64),

    #[error("Attribute not found: {0}")]
    AttributeNotFound(String),

    #[error("An attribute named '{0}' already exists")]
    DuplicateAttribute(String),

    // user input
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),

    #[error("Invalid color: {0} (expected #RGB or #RRGGBB)")]
    InvalidColor(String),

    #[error("Invalid search condition: {0}")]
    InvalidCondition(String),

    // configuration file
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // output formats
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
