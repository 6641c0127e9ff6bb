//! Auth Token Repository
//!
//! One token per user. Keys are generated by the caller
//! (see `auth::token::generate_key`).

use super::RepoResult;
use shared::models::User;
use sqlx::SqlitePool;

/// Return the user's token, storing `candidate_key` if they have none yet
pub async fn get_or_create(
    pool: &SqlitePool,
    user_id: i64,
    candidate_key: &str,
    now_millis: i64,
) -> RepoResult<String> {
    sqlx::query(
        "INSERT INTO auth_token (key, user_id, created_at) VALUES (?, ?, ?) \
         ON CONFLICT(user_id) DO NOTHING",
    )
    .bind(candidate_key)
    .bind(user_id)
    .bind(now_millis)
    .execute(pool)
    .await?;

    let key = sqlx::query_scalar::<_, String>("SELECT key FROM auth_token WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(key)
}

/// Resolve a token key to its owner
pub async fn find_user_by_key(pool: &SqlitePool, key: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT u.id, u.username, u.email, u.first_name, u.last_name \
         FROM auth_token t JOIN app_user u ON u.id = t.user_id \
         WHERE t.key = ?",
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Revoke a token; returns whether one was removed
pub async fn delete_by_key(pool: &SqlitePool, key: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM auth_token WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
