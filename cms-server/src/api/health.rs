//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 存活 + 数据库检查 |
//!
//! ```json
//! { "status": "healthy", "version": "0.1.0", "database": true }
//! ```

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use http::StatusCode;
use shared::client::HealthResponse;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// GET /health
///
/// 503 when the store does not answer.
async fn health(State(state): State<ServerState>) -> impl IntoResponse {
    let database = match state.pool.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unavailable");
            false
        }
    };

    let status = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if database { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
        }),
    )
}
