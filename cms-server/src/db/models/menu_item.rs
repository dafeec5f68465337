//! Menu Item Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Menu item record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: RecordId,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    /// Insertion time (millis)
    #[serde(default)]
    pub created_at: i64,
}

/// Insert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub created_at: i64,
}
