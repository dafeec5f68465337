//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item as returned by `GET /api/menu`
///
/// `_id` is the opaque record key; `image` is `/uploads/<name>` or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Numeric value kept as text
    pub price: String,
    pub image: String,
    pub category: String,
}

/// Update menu item payload; `None` leaves the field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MenuItemUpdate {
    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.image.is_none() && self.category.is_none()
    }
}

/// Parse a price string, accepting only finite non-negative numbers
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}
