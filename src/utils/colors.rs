/// ANSI color helper utilities for terminal output.
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

/// Validate a `#RGB` / `#RRGGBB` color and return it upper-cased.
pub fn normalize_hex(color: &str) -> AppResult<String> {
    let c = color.trim();
    if HEX_COLOR.is_match(c) {
        Ok(c.to_uppercase())
    } else {
        Err(AppError::InvalidColor(color.to_string()))
    }
}

pub fn parse_optional_color(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| normalize_hex(s)).transpose()
}

/// RGB components of a hex color; anything unreadable maps to grey.
pub fn hex_to_rgb(color: &str) -> (u8, u8, u8) {
    let c = color.trim().trim_start_matches('#');
    let expanded: String = if c.len() == 3 {
        c.chars().flat_map(|ch| [ch, ch]).collect()
    } else {
        c.to_string()
    };

    if expanded.len() != 6 {
        return (136, 136, 136);
    }

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).unwrap_or(136);
    (channel(0), channel(2), channel(4))
}

/// A two-column block painted with the entry/attribute color (24-bit ANSI).
pub fn swatch(color: &str) -> String {
    let (r, g, b) = hex_to_rgb(color);
    format!("\x1b[48;2;{r};{g};{b}m  {RESET}")
}

/// Coverage color:
/// ≥ 75% → green
/// ≥ 25% → yellow
/// else → grey
pub fn color_for_coverage(percent: i64) -> &'static str {
    if percent >= 75 {
        GREEN
    } else if percent >= 25 {
        YELLOW
    } else {
        GREY
    }
}
