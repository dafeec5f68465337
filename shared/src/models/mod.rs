//! API models
//!
//! What clients see on the JSON endpoints. Store records live in
//! `cms-server::db::models` and are converted at the handler boundary.

pub mod menu_item;
pub mod reservation;

pub use menu_item::*;
pub use reservation::*;
