//! Booking Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{Booking, BookingCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, first_name, reservation_date, reservation_slot";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Booking>> {
    let bookings =
        sqlx::query_as::<_, Booking>(&format!("SELECT {COLUMNS} FROM booking ORDER BY id"))
            .fetch_all(pool)
            .await?;
    Ok(bookings)
}

/// Bookings on exactly `date`
pub async fn find_by_date(pool: &SqlitePool, date: NaiveDate) -> RepoResult<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {COLUMNS} FROM booking WHERE reservation_date = ? ORDER BY id"
    ))
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Booking>> {
    let booking =
        sqlx::query_as::<_, Booking>(&format!("SELECT {COLUMNS} FROM booking WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(booking)
}

/// Plain insert, no slot check
pub async fn create(pool: &SqlitePool, data: BookingCreate) -> RepoResult<Booking> {
    let booking = sqlx::query_as::<_, Booking>(&format!(
        "INSERT INTO booking (first_name, reservation_date, reservation_slot) \
         VALUES (?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(&data.first_name)
    .bind(data.reservation_date)
    .bind(data.reservation_slot)
    .fetch_one(pool)
    .await?;
    Ok(booking)
}

/// Insert only if no booking holds the same (date, slot)
///
/// Check and insert are one statement, so two concurrent callers cannot
/// both win. `None` means the slot was already taken.
pub async fn create_if_slot_free(
    pool: &SqlitePool,
    data: BookingCreate,
) -> RepoResult<Option<Booking>> {
    let booking = sqlx::query_as::<_, Booking>(&format!(
        "INSERT INTO booking (first_name, reservation_date, reservation_slot) \
         SELECT ?1, ?2, ?3 \
         WHERE NOT EXISTS ( \
             SELECT 1 FROM booking WHERE reservation_date = ?2 AND reservation_slot = ?3 \
         ) \
         RETURNING {COLUMNS}"
    ))
    .bind(&data.first_name)
    .bind(data.reservation_date)
    .bind(data.reservation_slot)
    .fetch_optional(pool)
    .await?;
    Ok(booking)
}

/// Full replace of every mutable field, no slot check
pub async fn update(pool: &SqlitePool, id: i64, data: BookingCreate) -> RepoResult<Booking> {
    sqlx::query_as::<_, Booking>(&format!(
        "UPDATE booking SET first_name = ?1, reservation_date = ?2, reservation_slot = ?3 \
         WHERE id = ?4 RETURNING {COLUMNS}"
    ))
    .bind(&data.first_name)
    .bind(data.reservation_date)
    .bind(data.reservation_slot)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Booking {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM booking WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Booking {id} not found")));
    }
    Ok(())
}
