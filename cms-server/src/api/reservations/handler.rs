//! Reservation API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use shared::client::SubmitAck;
use shared::models::{self as api, ReservationCreate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::db::models;
use crate::db::repository::ReservationRepository;

/// POST /submit-reservation
///
/// No field validation: whatever the form sent is stored as-is.
pub async fn submit(
    State(state): State<ServerState>,
    payload: Result<Json<ReservationCreate>, JsonRejection>,
) -> AppResult<Json<SubmitAck>> {
    let Json(payload) = payload.map_err(|e| {
        AppError::with_message(ErrorCode::ReservationInvalid, e.body_text())
    })?;

    let data = models::ReservationCreate::from_request(payload, shared::util::now_millis());
    let conn = state.pool.acquire().await?;
    let created = ReservationRepository::new(&conn).create(data).await?;

    tracing::info!(id = %created.id, date = %created.date, time = %created.time, "Reservation stored");
    Ok(Json(SubmitAck::reservation_submitted()))
}

/// GET /api/reservations - 预订列表 (插入顺序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<api::Reservation>>> {
    let conn = state.pool.acquire().await?;
    let reservations = ReservationRepository::new(&conn).find_all().await?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}
