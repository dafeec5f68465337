//! Database Models
//!
//! SurrealDB 记录结构；API 模型见 `shared::models`。

pub mod credential;
pub mod menu_item;
pub mod reservation;

pub use credential::{Credential, CredentialCreate};
pub use menu_item::{MenuItem, MenuItemCreate};
pub use reservation::{Reservation, ReservationCreate};

use surrealdb::RecordId;

/// Record key without the `table:` prefix
pub fn record_key(id: &RecordId) -> String {
    let full = id.to_string();
    let prefix = format!("{}:", id.table());
    match full.strip_prefix(&prefix) {
        Some(key) => key.to_string(),
        None => full,
    }
}

/// Parse a client-supplied key into a record id; `None` for malformed keys
pub fn parse_key(table: &str, key: &str) -> Option<RecordId> {
    key.trim()
        .parse::<i64>()
        .ok()
        .map(|k| RecordId::from_table_key(table, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roundtrip() {
        let id = parse_key("menu_item", "123456789").unwrap();
        assert_eq!(id.table(), "menu_item");
        assert_eq!(record_key(&id), "123456789");
    }

    #[test]
    fn malformed_keys_rejected() {
        assert!(parse_key("menu_item", "abc").is_none());
        assert!(parse_key("menu_item", "").is_none());
        assert!(parse_key("menu_item", "1;DELETE menu_item").is_none());
    }
}
