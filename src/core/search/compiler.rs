//! Turns an ordered list of search conditions into one parameterized
//! predicate over the `entries` table.
//!
//! Every clause is emitted in parentheses and joined to what was built so far
//! with its own connective, strictly left to right:
//! `[A, B(or), C(and)]` → `((A OR B) AND C)`.
//! Clauses that cannot produce SQL are dropped without leaving a connective.

use crate::models::condition::{Clause, DateMatch, Logic, RawCondition, SearchCondition, TextMatch};
use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;

/// Entries joined with their attributes; DISTINCT collapses the rows an entry
/// gets for each attached attribute, the LEFT joins keep untagged entries.
pub const BASE_QUERY: &str = "SELECT DISTINCT d.id, d.date, d.start_time, d.end_time, d.name, d.notes, d.color
FROM entries d
LEFT JOIN entry_attributes ea ON ea.entry_id = d.id
LEFT JOIN attributes a ON a.id = ea.attribute_id";

pub const ORDER_BY: &str = "ORDER BY d.date DESC, d.start_time ASC";

/// A positional parameter bound to one `?` of the predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    Text(String),
    Integer(i64),
}

impl ToSql for QueryParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            QueryParam::Text(s) => s.to_sql(),
            QueryParam::Integer(i) => i.to_sql(),
        }
    }
}

impl From<&str> for QueryParam {
    fn from(s: &str) -> Self {
        QueryParam::Text(s.to_string())
    }
}

impl From<i64> for QueryParam {
    fn from(i: i64) -> Self {
        QueryParam::Integer(i)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledQuery {
    /// `None` when no condition produced a clause: every entry matches.
    pub predicate: Option<String>,
    pub params: Vec<QueryParam>,
}

impl CompiledQuery {
    pub fn matches_all(&self) -> bool {
        self.predicate.is_none()
    }

    /// Full statement ready for `Connection::prepare`.
    pub fn to_sql(&self) -> String {
        match &self.predicate {
            Some(p) => format!("{BASE_QUERY}\nWHERE {p}\n{ORDER_BY}"),
            None => format!("{BASE_QUERY}\n{ORDER_BY}"),
        }
    }

    pub fn param_refs(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p as &dyn ToSql).collect()
    }
}

/// Compile typed conditions. Pure: same input, same output.
pub fn compile(conditions: &[SearchCondition]) -> CompiledQuery {
    let mut predicate: Option<String> = None;
    let mut params = Vec::new();

    for cond in conditions {
        let Some((sql, clause_params)) = clause_sql(&cond.clause) else {
            continue;
        };

        let sql = if cond.negate {
            format!("NOT {sql}")
        } else {
            sql
        };

        predicate = Some(match predicate {
            None => sql,
            Some(acc) => format!(
                "({acc} {} {sql})",
                cond.logic.unwrap_or(Logic::And).as_sql()
            ),
        });
        params.extend(clause_params);
    }

    CompiledQuery { predicate, params }
}

/// Compile loosely typed conditions; those that do not describe a valid
/// clause are skipped as if absent.
pub fn compile_raw(raw: &[RawCondition]) -> CompiledQuery {
    let typed: Vec<SearchCondition> = raw.iter().filter_map(RawCondition::to_condition).collect();
    compile(&typed)
}

fn text_sql(column: &str, m: &TextMatch) -> (String, Vec<QueryParam>) {
    match m {
        TextMatch::Contains(v) => (
            format!("({column} LIKE ?)"),
            vec![QueryParam::Text(format!("%{v}%"))],
        ),
        TextMatch::Equals(v) => (format!("({column} = ?)"), vec![QueryParam::Text(v.clone())]),
    }
}

fn date_param(d: &chrono::NaiveDate) -> QueryParam {
    QueryParam::Text(d.format("%Y-%m-%d").to_string())
}

fn clause_sql(clause: &Clause) -> Option<(String, Vec<QueryParam>)> {
    match clause {
        Clause::Name(m) => Some(text_sql("d.name", m)),
        Clause::Notes(m) => Some(text_sql("d.notes", m)),
        Clause::Date(DateMatch::Equals(d)) => Some(("(d.date = ?)".into(), vec![date_param(d)])),
        Clause::Date(DateMatch::Before(d)) => Some(("(d.date < ?)".into(), vec![date_param(d)])),
        Clause::Date(DateMatch::After(d)) => Some(("(d.date > ?)".into(), vec![date_param(d)])),
        Clause::Date(DateMatch::Between {
            from: Some(from),
            to: Some(to),
        }) => Some((
            "(d.date BETWEEN ? AND ?)".into(),
            vec![date_param(from), date_param(to)],
        )),
        Clause::Date(DateMatch::Between { .. }) => None,
        Clause::AttributeIn(ids) if ids.is_empty() => None,
        Clause::AttributeIn(ids) => {
            // Membership through the association table, not the outer join
            let placeholders = vec!["?"; ids.len()].join(",");
            Some((
                format!(
                    "(d.id IN (SELECT entry_id FROM entry_attributes WHERE attribute_id IN ({placeholders})))"
                ),
                ids.iter().map(|id| QueryParam::Integer(*id)).collect(),
            ))
        }
    }
}
