//! User Repository

use super::{RepoError, RepoResult};
use shared::models::{User, UserCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, username, email, first_name, last_name";

/// Login lookup row (carries the hash, never leaves the server)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: i64,
    pub username: String,
    pub password_hash: Option<String>,
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM app_user ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM app_user WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_credentials(
    pool: &SqlitePool,
    username: &str,
) -> RepoResult<Option<UserCredentials>> {
    let creds = sqlx::query_as::<_, UserCredentials>(
        "SELECT id, username, password_hash FROM app_user WHERE username = ? LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(creds)
}

/// Create a user with no usable password (users viewset)
pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    insert(pool, &data, None).await
}

/// Create a user that can log in
pub async fn create_with_password(
    pool: &SqlitePool,
    data: UserCreate,
    password_hash: &str,
) -> RepoResult<User> {
    insert(pool, &data, Some(password_hash)).await
}

async fn insert(
    pool: &SqlitePool,
    data: &UserCreate,
    password_hash: Option<&str>,
) -> RepoResult<User> {
    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO app_user (username, email, first_name, last_name, password_hash) \
         VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(&data.username)
    .bind(&data.email)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(user)
}

/// Full replace of the profile fields; the password hash is untouched
pub async fn update(pool: &SqlitePool, id: i64, data: UserCreate) -> RepoResult<User> {
    sqlx::query_as::<_, User>(&format!(
        "UPDATE app_user SET username = ?1, email = ?2, first_name = ?3, last_name = ?4 \
         WHERE id = ?5 RETURNING {COLUMNS}"
    ))
    .bind(&data.username)
    .bind(&data.email)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

/// Delete a user; their token goes with them (ON DELETE CASCADE)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM app_user WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    fn user(name: &str) -> UserCreate {
        UserCreate {
            username: name.into(),
            email: format!("{name}@littlelemon.test"),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_is_duplicate() {
        let pool = test_pool().await;
        create(&pool, user("adrian")).await.unwrap();
        let err = create(&pool, user("adrian")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_viewset_users_have_no_password() {
        let pool = test_pool().await;
        create(&pool, user("mario")).await.unwrap();
        let creds = find_credentials(&pool, "mario").await.unwrap().unwrap();
        assert!(creds.password_hash.is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_password_hash() {
        let pool = test_pool().await;
        let u = create_with_password(&pool, user("tilly"), "$argon2id$stub")
            .await
            .unwrap();
        let mut changed = user("tilly");
        changed.first_name = "Tilly".into();
        let updated = update(&pool, u.id, changed).await.unwrap();
        assert_eq!(updated.first_name, "Tilly");

        let creds = find_credentials(&pool, "tilly").await.unwrap().unwrap();
        assert_eq!(creds.password_hash.as_deref(), Some("$argon2id$stub"));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let pool = test_pool().await;
        assert!(matches!(
            delete(&pool, 77).await.unwrap_err(),
            RepoError::NotFound(_)
        ));
    }
}
