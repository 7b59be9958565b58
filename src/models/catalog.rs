//! Catalog entities
//!
//! Foods and meals that free-text input can be resolved to.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[default]
    Food,
    Meal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntity {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub kind: EntityKind,
}

impl CatalogEntity {
    pub fn food(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: EntityKind::Food,
        }
    }

    pub fn meal(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: EntityKind::Meal,
        }
    }
}
