use crate::config::Config;
use crate::db::attributes::{
    delete_attribute, get_attribute, insert_attribute, list_attributes, update_attribute,
    usage_counts,
};
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attribute::Attribute;
use std::collections::HashMap;

pub struct AttributeLogic;

impl AttributeLogic {
    pub fn add(
        pool: &mut DbPool,
        cfg: &Config,
        name: &str,
        color: Option<String>,
    ) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Other("Attribute name cannot be empty".into()));
        }

        let color = color.unwrap_or_else(|| cfg.default_attribute_color.clone());
        let id = insert_attribute(&pool.conn, name, &color)?;

        ttlog_lenient(
            &pool.conn,
            "add",
            &format!("attribute #{}", id),
            &format!("Added attribute '{}'", name),
        );
        Ok(id)
    }

    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        name: Option<String>,
        color: Option<String>,
    ) -> AppResult<Attribute> {
        let current = get_attribute(&pool.conn, id)?
            .ok_or_else(|| AppError::AttributeNotFound(format!("#{id}")))?;

        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or(current.name);
        let color = color.unwrap_or(current.color);

        update_attribute(&pool.conn, id, &name, &color)?;

        ttlog_lenient(
            &pool.conn,
            "edit",
            &format!("attribute #{}", id),
            &format!("Attribute is now '{}' {}", name, color),
        );
        Ok(Attribute::new(id, name, color))
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<Attribute> {
        let current = get_attribute(&pool.conn, id)?
            .ok_or_else(|| AppError::AttributeNotFound(format!("#{id}")))?;

        delete_attribute(&pool.conn, id)?;

        ttlog_lenient(
            &pool.conn,
            "del",
            &format!("attribute #{}", id),
            &format!("Deleted attribute '{}'", current.name),
        );
        Ok(current)
    }

    /// Attributes ordered by name, with the number of entries using each.
    pub fn list(pool: &mut DbPool) -> AppResult<Vec<(Attribute, i64)>> {
        let counts: HashMap<i64, i64> = usage_counts(&pool.conn)?.into_iter().collect();

        Ok(list_attributes(&pool.conn)?
            .into_iter()
            .map(|a| {
                let n = counts.get(&a.id).copied().unwrap_or(0);
                (a, n)
            })
            .collect())
    }
}
