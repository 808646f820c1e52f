//! Time utilities: parsing HH:MM[:SS], minutes since midnight, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Validate a user supplied time and return it in the stored `HH:MM:SS` form.
pub fn normalize_time(t: &str) -> AppResult<String> {
    parse_time(t)
        .map(|nt| nt.format("%H:%M:%S").to_string())
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| normalize_time(s)).transpose()
}

/// Minutes since midnight of a stored time string. Seconds are ignored.
///
/// Never fails: a string whose hour or minute component cannot be read
/// (or is out of range) counts as `00:00`.
pub fn minutes_of_day(t: &str) -> i64 {
    let mut it = t.trim().split(':');
    let h = it.next().and_then(|s| s.trim().parse::<i64>().ok());
    let m = it.next().and_then(|s| s.trim().parse::<i64>().ok());

    match (h, m) {
        (Some(h), Some(m)) if (0..=24).contains(&h) && (0..60).contains(&m) => {
            (h * 60 + m).min(MINUTES_PER_DAY)
        }
        _ => 0,
    }
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// `HH:MM` part of a stored time.
pub fn short_time(t: &str) -> String {
    t.trim().chars().take(5).collect()
}
