//! Search conditions: one filter clause of a search session.
//!
//! A condition's value shape is decided by its field, so the clause is an
//! enum whose variants carry only the value legal for that field. Loosely
//! typed input (JSON files, the text grammar) goes through [`RawCondition`],
//! which drops anything it cannot express as a [`Clause`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Connective joining a condition to the conditions before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl Logic {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Logic::And => "AND",
            Logic::Or => "OR",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Some(Logic::And),
            "OR" => Some(Logic::Or),
            _ => None,
        }
    }
}

/// Operators available on the free-text fields (name, notes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Contains(String),
    Equals(String),
}

/// Operators available on the entry date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateMatch {
    Equals(NaiveDate),
    Before(NaiveDate),
    After(NaiveDate),
    /// Inclusive range. A missing bound makes the clause a no-op.
    Between {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

/// Field + operator + value of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Name(TextMatch),
    Notes(TextMatch),
    Date(DateMatch),
    /// Entry carries at least one of these attribute ids.
    AttributeIn(Vec<i64>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCondition {
    pub clause: Clause,
    /// `None` means AND; ignored on the first condition that yields SQL.
    pub logic: Option<Logic>,
    pub negate: bool,
}

impl SearchCondition {
    pub fn new(clause: Clause) -> Self {
        Self {
            clause,
            logic: None,
            negate: false,
        }
    }

    pub fn and(mut self) -> Self {
        self.logic = Some(Logic::And);
        self
    }

    pub fn or(mut self) -> Self {
        self.logic = Some(Logic::Or);
        self
    }

    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }
}

/// Condition as it arrives from untyped input:
/// `{ "field": "...", "operator": "...", "value": ..., "logic": "AND"|"OR", "negate": bool }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCondition {
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub logic: Option<String>,
    #[serde(default)]
    pub negate: bool,
}

impl RawCondition {
    /// Typed view of this condition, or `None` when the field/operator pair is
    /// unknown or the value has the wrong shape for the field.
    pub fn to_condition(&self) -> Option<SearchCondition> {
        let op = self.operator.to_ascii_lowercase();

        let clause = match self.field.to_ascii_lowercase().as_str() {
            "name" => Clause::Name(text_match(&op, &self.value)?),
            "notes" => Clause::Notes(text_match(&op, &self.value)?),
            "date" => Clause::Date(date_match(&op, &self.value)?),
            "attribute" if op == "in" => Clause::AttributeIn(attribute_ids(&self.value)?),
            _ => return None,
        };

        Some(SearchCondition {
            clause,
            logic: self.logic.as_deref().and_then(Logic::from_str_opt),
            negate: self.negate,
        })
    }
}

fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text_match(op: &str, v: &Value) -> Option<TextMatch> {
    let text = scalar_text(v)?;
    match op {
        "contains" => Some(TextMatch::Contains(text)),
        "equals" => Some(TextMatch::Equals(text)),
        _ => None,
    }
}

fn parse_date_value(v: &Value) -> Option<NaiveDate> {
    v.as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

fn date_match(op: &str, v: &Value) -> Option<DateMatch> {
    match op {
        "equals" => parse_date_value(v).map(DateMatch::Equals),
        "before" => parse_date_value(v).map(DateMatch::Before),
        "after" => parse_date_value(v).map(DateMatch::After),
        "between" => {
            let obj = v.as_object()?;
            Some(DateMatch::Between {
                from: obj.get("from").and_then(parse_date_value),
                to: obj.get("to").and_then(parse_date_value),
            })
        }
        _ => None,
    }
}

/// Accepts `[1, 2]` as well as `[{"id": 1, ...}, {"Id": 2, ...}]`.
fn attribute_ids(v: &Value) -> Option<Vec<i64>> {
    let items = v.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| match item {
                Value::Number(n) => n.as_i64(),
                Value::Object(o) => o.get("id").or_else(|| o.get("Id")).and_then(Value::as_i64),
                _ => None,
            })
            .collect(),
    )
}
