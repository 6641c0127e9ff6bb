//! Table booking API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{Booking, BookingCreate, BookingReplace, BookingUpdate};

use crate::api::or_missing;
use crate::core::ServerState;
use crate::db::repository::booking;
use crate::reservations::is_slot_taken;
use crate::utils::extract::{IdPath, Payload};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate(data: &BookingCreate) -> AppResult<()> {
    validate_required_text(&data.first_name, "first_name", MAX_NAME_LEN)
}

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::BookingNotFound, format!("Booking {id} not found"))
}

/// GET /api/tables/
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = booking::find_all(&state.db.pool).await?;
    Ok(Json(bookings))
}

/// POST /api/tables/ - 直接写入，允许重复时段
pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<BookingCreate>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    validate(&payload)?;

    let date = payload.reservation_date;
    let slot = payload.reservation_slot;
    let same_day = booking::find_by_date(&state.db.pool, date).await?;
    if is_slot_taken(&same_day, date, slot) {
        tracing::warn!(%date, slot, "API booking shares an occupied slot");
    }

    let created = booking::create(&state.db.pool, payload).await?;
    tracing::info!(booking_id = created.id, "Booking created via API");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/tables/{id}/
pub async fn get_by_id(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Booking>> {
    let found = booking::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(found))
}

/// PUT /api/tables/{id}/ - 未提供时段时保留原值
pub async fn update(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    Payload(payload): Payload<BookingReplace>,
) -> AppResult<Json<Booking>> {
    let current = booking::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let replaced = payload.apply_to(&current);
    validate(&replaced)?;
    let updated = booking::update(&state.db.pool, id, replaced)
        .await
        .map_err(|e| or_missing(e, not_found(id)))?;
    Ok(Json(updated))
}

/// PATCH /api/tables/{id}/
pub async fn partial_update(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    Payload(payload): Payload<BookingUpdate>,
) -> AppResult<Json<Booking>> {
    let current = booking::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let merged = payload.apply_to(&current);
    validate(&merged)?;
    let updated = booking::update(&state.db.pool, id, merged)
        .await
        .map_err(|e| or_missing(e, not_found(id)))?;
    Ok(Json(updated))
}

/// DELETE /api/tables/{id}/
pub async fn delete(State(state): State<ServerState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    booking::delete(&state.db.pool, id)
        .await
        .map_err(|e| or_missing(e, not_found(id)))?;
    Ok(StatusCode::NO_CONTENT)
}
