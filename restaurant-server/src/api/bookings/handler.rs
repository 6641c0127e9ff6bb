//! Booking endpoint handlers

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::models::{Booking, BookingCreate};

use crate::core::ServerState;
use crate::db::repository::booking;
use crate::reservations::{self, ReserveOutcome};
use crate::utils::extract::Payload;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    pub date: Option<String>,
}

impl BookingsQuery {
    /// Parsed `date`, `None` when absent or blank
    fn date(&self) -> AppResult<Option<NaiveDate>> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| {
                    AppError::new(ErrorCode::InvalidReservationDate).with_detail("field", "date")
                }),
        }
    }
}

/// Body returned when the requested slot is already booked
#[derive(Debug, Serialize)]
pub struct SlotTakenBody {
    pub error: u8,
    pub message: &'static str,
}

const SLOT_TAKEN_MESSAGE: &str = "This slot is already booked";

/// GET /bookings?date= - 当天预订 (默认今天，服务器本地时区)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<BookingsQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let date = query.date()?.unwrap_or_else(|| Local::now().date_naive());
    let bookings = booking::find_by_date(&state.db.pool, date).await?;
    Ok(Json(bookings))
}

/// POST /bookings - 原子地检查并写入
///
/// 成功时返回 `?date=` 指定日期 (否则为预订日期) 的全部预订。
pub async fn reserve(
    State(state): State<ServerState>,
    Query(query): Query<BookingsQuery>,
    Payload(payload): Payload<BookingCreate>,
) -> AppResult<Response> {
    validate_required_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    let listed_date = query.date()?.unwrap_or(payload.reservation_date);

    match reservations::reserve(&state.db.pool, payload).await? {
        ReserveOutcome::Reserved(_) => {
            let bookings = booking::find_by_date(&state.db.pool, listed_date).await?;
            Ok(Json(bookings).into_response())
        }
        ReserveOutcome::SlotTaken if state.config.bookings_strict_conflict => {
            Err(AppError::new(ErrorCode::BookingSlotTaken))
        }
        ReserveOutcome::SlotTaken => Ok(Json(SlotTakenBody {
            error: 1,
            message: SLOT_TAKEN_MESSAGE,
        })
        .into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_date_parsing() {
        let q = BookingsQuery { date: None };
        assert_eq!(q.date().unwrap(), None);

        let q = BookingsQuery {
            date: Some(" ".into()),
        };
        assert_eq!(q.date().unwrap(), None);

        let q = BookingsQuery {
            date: Some("2024-12-25".into()),
        };
        assert_eq!(q.date().unwrap(), NaiveDate::from_ymd_opt(2024, 12, 25));

        let q = BookingsQuery {
            date: Some("25-12-2024".into()),
        };
        assert_eq!(
            q.date().unwrap_err().code,
            ErrorCode::InvalidReservationDate
        );
    }

    #[test]
    fn test_slot_taken_body_shape() {
        let body = serde_json::to_value(SlotTakenBody {
            error: 1,
            message: SLOT_TAKEN_MESSAGE,
        })
        .unwrap();
        assert_eq!(body["error"], 1);
        assert_eq!(body["message"], "This slot is already booked");
    }
}
