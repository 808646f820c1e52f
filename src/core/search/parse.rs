//! Text form of a search condition, one condition per CLI argument:
//!
//! ```text
//! [and|or] [not] <field> <operator> <value...>
//!
//! name contains gym
//! or notes equals rest day
//! and not date between 2024-01-01 2024-01-31
//! attribute in work,sport
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::condition::{Clause, DateMatch, Logic, SearchCondition, TextMatch};
use crate::utils::date::parse_date;
use regex::Regex;
use std::sync::LazyLock;

static CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:(and|or)\s+)?(?:(not)\s+)?([a-z]+)\s+([a-z]+)(?:\s+(.*?))?\s*$")
        .expect("valid regex")
});

/// Parse one condition. `resolve_attribute` maps an attribute name to its id;
/// names it does not know are left out of the clause.
pub fn parse_condition<F>(text: &str, resolve_attribute: F) -> AppResult<SearchCondition>
where
    F: Fn(&str) -> Option<i64>,
{
    let invalid = |why: &str| AppError::InvalidCondition(format!("'{}': {}", text.trim(), why));

    let caps = CONDITION
        .captures(text)
        .ok_or_else(|| invalid("expected `[and|or] [not] <field> <operator> <value>`"))?;

    let logic = caps.get(1).and_then(|m| Logic::from_str_opt(m.as_str()));
    let negate = caps.get(2).is_some();
    let field = caps[3].to_ascii_lowercase();
    let operator = caps[4].to_ascii_lowercase();
    let value = caps.get(5).map(|m| m.as_str()).unwrap_or("");

    let clause = match (field.as_str(), operator.as_str()) {
        ("name" | "notes", "contains" | "equals") => {
            if value.is_empty() {
                return Err(invalid("missing value"));
            }
            let m = if operator == "contains" {
                TextMatch::Contains(value.to_string())
            } else {
                TextMatch::Equals(value.to_string())
            };
            if field == "name" {
                Clause::Name(m)
            } else {
                Clause::Notes(m)
            }
        }
        ("date", "equals" | "before" | "after") => {
            let d = parse_date(value).ok_or_else(|| invalid("expected a YYYY-MM-DD date"))?;
            Clause::Date(match operator.as_str() {
                "equals" => DateMatch::Equals(d),
                "before" => DateMatch::Before(d),
                _ => DateMatch::After(d),
            })
        }
        ("date", "between") => {
            let mut bounds = value
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|s| !s.is_empty());
            Clause::Date(DateMatch::Between {
                from: bounds.next().and_then(parse_date),
                to: bounds.next().and_then(parse_date),
            })
        }
        ("attribute" | "attr" | "tag", "in") => Clause::AttributeIn(
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(&resolve_attribute)
                .collect(),
        ),
        _ => {
            return Err(invalid(&format!(
                "unsupported field/operator '{} {}'",
                field, operator
            )));
        }
    };

    Ok(SearchCondition {
        clause,
        logic,
        negate,
    })
}
