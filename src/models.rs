// src/models.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        CategoryResponse {
            id: category.id,
            name: category.name.clone(),
            updated_at: category.updated_at,
        }
    }
}
