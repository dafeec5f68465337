//! 类型转换模块
//!
//! 将数据库模型 (db::models) 转换为 API 响应模型 (shared::models)

use crate::db::models::{self as db, record_key};
use shared::models as api;

// ============ Menu Item ============

impl From<db::MenuItem> for api::MenuItem {
    fn from(m: db::MenuItem) -> Self {
        Self {
            id: record_key(&m.id),
            name: m.name,
            price: m.price,
            image: m.image,
            category: m.category,
        }
    }
}

// ============ Reservation ============

impl From<db::Reservation> for api::Reservation {
    fn from(r: db::Reservation) -> Self {
        Self {
            id: record_key(&r.id),
            name: r.name,
            email: r.email,
            phone: r.phone,
            date: r.date,
            time: r.time,
            guests: r.guests,
            special_requests: r.special_requests,
            created_at: r.created_at,
        }
    }
}
