//! Authentication Handlers
//!
//! Session-less login. With a role selector the response is JSON for the
//! frontend to act on; without one the legacy form flow redirects or
//! re-renders the login page.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use shared::client::{LoginForm, LoginResponse};
use shared::{AppError, ErrorCode};

use crate::api::found;
use crate::auth::{LoginMode, Role};
use crate::core::ServerState;
use crate::pages;

/// POST /login
pub async fn login(
    State(state): State<ServerState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form.map_err(|e| {
        AppError::with_message(ErrorCode::InvalidFormat, e.body_text())
    })?;

    match LoginMode::parse(form.role.as_deref())? {
        LoginMode::Role(role) => role_login(&state, role, &form).await,
        LoginMode::Legacy => legacy_login(&state, &form).await,
    }
}

/// Role-aware login: 200 `{success, redirect}` or 401 JSON error
async fn role_login(state: &ServerState, role: Role, form: &LoginForm) -> Result<Response, AppError> {
    let ok = state
        .credentials
        .check_role(role, &form.userid, &form.password)
        .await?;

    if !ok {
        return Err(AppError::invalid_credentials());
    }
    Ok(Json(LoginResponse::redirect_to(role.redirect())).into_response())
}

/// Legacy login: 302 to the dashboard or the login page with an inline error
async fn legacy_login(state: &ServerState, form: &LoginForm) -> Result<Response, AppError> {
    let ok = state
        .credentials
        .check_legacy(&form.userid, &form.password)
        .await?;

    if ok {
        tracing::info!(identifier = %form.userid, "Legacy login succeeded");
        return Ok(found(Role::Admin.redirect()));
    }

    Ok((
        StatusCode::UNAUTHORIZED,
        Html(pages::login(Some(ErrorCode::InvalidCredentials.message()))),
    )
        .into_response())
}
