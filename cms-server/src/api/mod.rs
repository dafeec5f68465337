//! API 路由模块
//!
//! # 结构
//!
//! - [`pages`] - 登录页与仪表盘 (HTML)
//! - [`auth`] - 登录
//! - [`menu`] - 菜品增删改查
//! - [`reservations`] - 预订
//! - [`upload`] - 已上传图片
//! - [`health`] - 健康检查
//!
//! 未注册的方法 + 路径组合 (包括已知路径的错误方法) 一律返回 404。
//! 任意路径的 OPTIONS 返回 200 (预检由 CORS 层应答)。

pub mod convert;

pub mod auth;
pub mod health;
pub mod menu;
pub mod pages;
pub mod reservations;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    response::{IntoResponse, Response},
};
use http::{Method, StatusCode, header};
use shared::{AppError, ErrorCode};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::core::ServerState;
use crate::middleware::logging_middleware;

/// Headroom above the upload limit for the other multipart fields
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

/// Build the route table (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(pages::router())
        .merge(auth::router())
        .merge(menu::router())
        .merge(reservations::router())
        .merge(upload::router())
        .merge(health::router())
}

/// Build the complete application: routes, fallbacks and middleware
pub fn build_router(state: ServerState) -> Router {
    let body_limit = state.config.max_upload_bytes + BODY_LIMIT_SLACK;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    build_app()
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
        // 从内到外：访问日志 -> CORS -> Trace -> 压缩 -> 请求 ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Fallback for unknown paths and wrong methods
///
/// Preflights are answered by the CORS layer; a bare `OPTIONS` still gets 200.
pub async fn not_found(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    AppError::with_message(ErrorCode::NotFound, "Not Found").into_response()
}

/// `302 Found` to `location`
pub fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
