//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, price, description FROM menu_item ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, price, description FROM menu_item WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, data: MenuItemCreate) -> RepoResult<MenuItem> {
    let item = sqlx::query_as::<_, MenuItem>(
        "INSERT INTO menu_item (name, price, description) VALUES (?, ?, ?) \
         RETURNING id, name, price, description",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.description)
    .fetch_one(pool)
    .await?;
    Ok(item)
}

/// Full replace of every mutable field
pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemCreate) -> RepoResult<MenuItem> {
    sqlx::query_as::<_, MenuItem>(
        "UPDATE menu_item SET name = ?1, price = ?2, description = ?3 WHERE id = ?4 \
         RETURNING id, name, price, description",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.description)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM menu_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    Ok(())
}
