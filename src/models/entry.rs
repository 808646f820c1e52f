use super::attribute::Attribute;
use crate::utils::time::minutes_of_day;
use chrono::NaiveDate;
use serde::Serialize;

/// One logged activity, as stored in the `entries` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,    // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub start_time: String, // ⇔ entries.start_time (TEXT "HH:MM:SS")
    pub end_time: String,   // ⇔ entries.end_time (TEXT "HH:MM:SS")
    pub name: String,       // ⇔ entries.name
    pub notes: String,      // ⇔ entries.notes
    pub color: String,      // ⇔ entries.color (hex)
    pub attributes: Vec<Attribute>,
}

impl Entry {
    /// Builder used mostly by tests and by callers holding in-memory data.
    pub fn new(id: i64, date: NaiveDate, start_time: &str, end_time: &str, name: &str) -> Self {
        Self {
            id,
            date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            name: name.to_string(),
            notes: String::new(),
            color: crate::config::DEFAULT_ENTRY_COLOR.to_string(),
            attributes: Vec::new(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Start as minutes since midnight (malformed times count as 00:00).
    pub fn start_minutes(&self) -> i64 {
        minutes_of_day(&self.start_time)
    }

    /// End as minutes since midnight (malformed times count as 00:00).
    pub fn end_minutes(&self) -> i64 {
        minutes_of_day(&self.end_time)
    }

    /// Same-day duration; spans that end before they start report 0.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_minutes() - self.start_minutes()).max(0)
    }

    /// Name to show, falling back to `placeholder` when blank.
    pub fn display_name<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.name.trim().is_empty() {
            placeholder
        } else {
            &self.name
        }
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }
}

/// Field values for creating or overwriting an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub name: String,
    pub notes: String,
    pub color: String,
}

impl From<&Entry> for NewEntry {
    fn from(e: &Entry) -> Self {
        Self {
            date: e.date,
            start_time: e.start_time.clone(),
            end_time: e.end_time.clone(),
            name: e.name.clone(),
            notes: e.notes.clone(),
            color: e.color.clone(),
        }
    }
}
