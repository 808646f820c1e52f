use super::compiler::{CompiledQuery, compile};
use super::parse::parse_condition;
use crate::db::attributes::find_attribute_by_name;
use crate::db::pool::DbPool;
use crate::db::queries::execute_query;
use crate::errors::{AppError, AppResult};
use crate::models::condition::{Clause, DateMatch, RawCondition, SearchCondition};
use crate::models::entry::Entry;
use crate::ui::messages::warning;
use crate::utils::date::{current_month_bounds, range_bounds};
use serde_json::Value;
use std::fs;

pub struct SearchLogic;

impl SearchLogic {
    /// Read a JSON array of raw conditions. Items that are not objects, or
    /// that do not describe a usable condition, are skipped.
    pub fn load_condition_file(path: &str) -> AppResult<Vec<SearchCondition>> {
        let content = fs::read_to_string(path)?;
        let items = match serde_json::from_str::<Value>(&content)? {
            Value::Array(items) => items,
            _ => {
                return Err(AppError::InvalidCondition(format!(
                    "{}: expected a JSON array of conditions",
                    path
                )));
            }
        };

        let total = items.len();
        let conditions: Vec<SearchCondition> = items
            .into_iter()
            .filter_map(|v| serde_json::from_value::<RawCondition>(v).ok())
            .filter_map(|raw| raw.to_condition())
            .collect();

        if conditions.len() < total {
            warning(format!(
                "{} of {} conditions in {} were not usable and have been skipped.",
                total - conditions.len(),
                total,
                path
            ));
        }

        Ok(conditions)
    }

    /// Parse textual conditions, resolving attribute names through storage.
    /// Unparseable conditions are reported and skipped.
    pub fn parse_conditions(pool: &DbPool, texts: &[String]) -> Vec<SearchCondition> {
        let resolve = |name: &str| match find_attribute_by_name(&pool.conn, name) {
            Ok(Some(a)) => Some(a.id),
            _ => {
                warning(format!("Unknown attribute '{}' ignored.", name));
                None
            }
        };

        texts
            .iter()
            .filter_map(|t| match parse_condition(t, resolve) {
                Ok(c) => Some(c),
                Err(e) => {
                    warning(format!("{} (skipped)", e));
                    None
                }
            })
            .collect()
    }

    pub fn run(pool: &DbPool, conditions: &[SearchCondition]) -> AppResult<(CompiledQuery, Vec<Entry>)> {
        let query = compile(conditions);
        let entries = execute_query(&pool.conn, &query)?;
        Ok((query, entries))
    }

    /// Date conditions for a `--period` value; `all` gives no condition,
    /// no period means the current month.
    pub fn period_conditions(period: Option<&str>) -> AppResult<Vec<SearchCondition>> {
        let (from, to) = match period {
            Some(p) if p.eq_ignore_ascii_case("all") => return Ok(Vec::new()),
            Some(p) => range_bounds(p).map_err(AppError::InvalidDate)?,
            None => current_month_bounds(),
        };

        let clause = if from == to {
            Clause::Date(DateMatch::Equals(from))
        } else {
            Clause::Date(DateMatch::Between {
                from: Some(from),
                to: Some(to),
            })
        };

        Ok(vec![SearchCondition::new(clause)])
    }
}
