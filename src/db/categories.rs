use super::db::Db;
use super::schema;
use anyhow::Result;
use serde::{Deserialize, Serialize};

const SELECT_CATEGORIES: &str = "SELECT id, nombre, color FROM categorias ORDER BY id";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
}

/// Read-only category repository. Categories are seeded once by schema
/// initialization and this layer exposes nothing destructive on them.
pub struct Categories {
    db: Db,
}

impl Categories {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        schema::ensure_schema(&db)?;
        Ok(Categories { db })
    }

    pub fn fetch_all(&self) -> Result<Vec<Category>> {
        let categories = self.db.query(SELECT_CATEGORIES, &[], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
                color: row.get(2)?,
            })
        })?;
        Ok(categories)
    }
}
