//! Reservation Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Reservation record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub guests: String,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Insert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub special_requests: String,
    pub created_at: i64,
}

impl ReservationCreate {
    pub fn from_request(req: shared::models::ReservationCreate, created_at: i64) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            date: req.date,
            time: req.time,
            guests: req.guests,
            special_requests: req.special_requests,
            created_at,
        }
    }
}
