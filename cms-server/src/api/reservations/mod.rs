//! 预订路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /submit-reservation | POST | 提交预订 (JSON) |
//! | /api/reservations | GET | 预订列表 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/submit-reservation", post(handler::submit))
        .route("/api/reservations", get(handler::list))
}
