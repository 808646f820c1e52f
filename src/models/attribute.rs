use serde::{Deserialize, Serialize};

/// A reusable tag that can be attached to any number of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: i64,       // ⇔ attributes.id
    pub name: String,  // ⇔ attributes.name (UNIQUE)
    pub color: String, // ⇔ attributes.color (hex, default '#888888')
}

impl Attribute {
    pub fn new(id: i64, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}
