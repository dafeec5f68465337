//! 页面路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / , /login.html | GET | 登录页 (无角色) |
//! | /admin-login.html | GET | 管理员登录页 |
//! | /staff-login.html | GET | 员工登录页 |
//! | /dashboard.html | GET | 菜品管理 |
//! | /staff-dashboard.html | GET | 预订列表 |

use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use shared::AppError;
use shared::models as api;

use crate::core::ServerState;
use crate::db::repository::{MenuItemRepository, ReservationRepository};
use crate::pages;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(login_page))
        .route("/login.html", get(login_page))
        .route("/admin-login.html", get(admin_login_page))
        .route("/staff-login.html", get(staff_login_page))
        .route("/dashboard.html", get(dashboard))
        .route("/staff-dashboard.html", get(staff_dashboard))
}

async fn login_page() -> Html<String> {
    Html(pages::login(None))
}

async fn admin_login_page() -> Html<&'static str> {
    Html(pages::admin_login())
}

async fn staff_login_page() -> Html<&'static str> {
    Html(pages::staff_login())
}

/// GET /dashboard.html - 菜品列表
async fn dashboard(State(state): State<ServerState>) -> Response {
    match load_menu(&state).await {
        Ok(items) => Html(pages::dashboard(&items, None)).into_response(),
        Err(e) => render_error(e, |msg| pages::dashboard(&[], Some(msg))),
    }
}

/// GET /staff-dashboard.html - 预订列表
async fn staff_dashboard(State(state): State<ServerState>) -> Response {
    match load_reservations(&state).await {
        Ok(list) => Html(pages::staff_dashboard(&list)).into_response(),
        Err(e) => render_error(e, |_| pages::staff_dashboard(&[])),
    }
}

async fn load_menu(state: &ServerState) -> Result<Vec<api::MenuItem>, AppError> {
    let conn = state.pool.acquire().await?;
    let items = MenuItemRepository::new(&conn).find_all().await?;
    Ok(items.into_iter().map(Into::into).collect())
}

async fn load_reservations(state: &ServerState) -> Result<Vec<api::Reservation>, AppError> {
    let conn = state.pool.acquire().await?;
    let list = ReservationRepository::new(&conn).find_all().await?;
    Ok(list.into_iter().map(Into::into).collect())
}

/// HTML pages show the error inline with the mapped status
fn render_error(err: AppError, render: impl FnOnce(&str) -> String) -> Response {
    tracing::error!(code = %err.code, message = %err.message, "Failed to render page");
    (err.http_status(), Html(render(err.public_message()))).into_response()
}
