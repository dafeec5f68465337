//! 认证路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /login | POST | 登录 (form: userid, password, role) |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/login", post(handler::login))
}
