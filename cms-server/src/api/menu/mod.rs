//! 菜品路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/menu | GET | 菜品列表 (JSON) |
//! | /add-menu | POST | 新增 (multipart: imageFile, name, price, category) |
//! | /update-menu/{id} | POST | 部分更新 (multipart，字段均可选) |
//! | /delete-menu/{id} | GET | 删除菜品及其图片 |

mod form;
mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/menu", get(handler::list))
        .route("/add-menu", post(handler::create))
        .route("/update-menu/{id}", post(handler::update))
        .route("/delete-menu/{id}", get(handler::delete))
}
