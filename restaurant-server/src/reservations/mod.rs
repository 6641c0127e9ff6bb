//! 预订模块 - 时段冲突规则与原子预订
//!
//! 规则只在 `/bookings` 端点生效；REST API 和 `/book/` 表单页直接写入，
//! 允许重复预订。

pub mod conflict;

pub use conflict::{is_slot_taken, taken_slots};

use shared::models::{Booking, BookingCreate};
use sqlx::SqlitePool;

use crate::db::repository::{RepoResult, booking};

/// Result of trying to reserve a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveOutcome {
    Reserved(Booking),
    SlotTaken,
}

/// Reserve `(date, slot)` unless someone already holds it
pub async fn reserve(pool: &SqlitePool, data: BookingCreate) -> RepoResult<ReserveOutcome> {
    let date = data.reservation_date;
    let slot = data.reservation_slot;
    match booking::create_if_slot_free(pool, data).await? {
        Some(b) => {
            tracing::info!(booking_id = b.id, %date, slot, "Booking reserved");
            Ok(ReserveOutcome::Reserved(b))
        }
        None => {
            tracing::info!(%date, slot, "Booking rejected, slot taken");
            Ok(ReserveOutcome::SlotTaken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;
    use chrono::NaiveDate;

    fn request(name: &str) -> BookingCreate {
        BookingCreate {
            first_name: name.into(),
            reservation_date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            reservation_slot: 18,
        }
    }

    #[tokio::test]
    async fn test_second_reservation_for_same_slot_is_refused() {
        let pool = test_pool().await;
        let first = reserve(&pool, request("John Smith")).await.unwrap();
        assert!(matches!(first, ReserveOutcome::Reserved(ref b) if b.first_name == "John Smith"));

        let second = reserve(&pool, request("Jane Doe")).await.unwrap();
        assert_eq!(second, ReserveOutcome::SlotTaken);

        let stored = booking::find_all(&pool).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(is_slot_taken(
            &stored,
            NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            18
        ));
    }
}
