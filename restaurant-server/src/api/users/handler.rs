//! User API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{User, UserCreate, UserReplace, UserUpdate};

use crate::api::{or_missing, username_taken};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{RepoError, user};
use crate::utils::extract::{IdPath, Payload};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_USER_FIELD_LEN, validate_text_len, validate_username,
};
use crate::utils::{AppError, AppResult, ErrorCode};

pub(crate) fn validate(data: &UserCreate) -> AppResult<()> {
    validate_username(&data.username)?;
    validate_text_len(&data.email, "email", MAX_EMAIL_LEN)?;
    validate_text_len(&data.first_name, "first_name", MAX_USER_FIELD_LEN)?;
    validate_text_len(&data.last_name, "last_name", MAX_USER_FIELD_LEN)?;
    Ok(())
}

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::UserNotFound, format!("User {id} not found"))
}

fn write_error(err: RepoError, id: Option<i64>) -> AppError {
    match (err, id) {
        (RepoError::Duplicate(_), _) => username_taken(),
        (e, Some(id)) => or_missing(e, not_found(id)),
        (e, None) => e.into(),
    }
}

/// GET /api/users/
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let users = user::find_all(&state.db.pool).await?;
    Ok(Json(users))
}

/// POST /api/users/
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Payload(payload): Payload<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    validate(&payload)?;
    let created = user::create(&state.db.pool, payload)
        .await
        .map_err(|e| write_error(e, None))?;
    tracing::info!(
        user_id = created.id,
        created_by = %current_user.username,
        "User created via API"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/users/{id}/
pub async fn get_by_id(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<Json<User>> {
    let found = user::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(found))
}

/// PUT /api/users/{id}/ - 未提供的可选字段保留原值
pub async fn update(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    Payload(payload): Payload<UserReplace>,
) -> AppResult<Json<User>> {
    let current = user::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let replaced = payload.apply_to(&current);
    validate(&replaced)?;
    let updated = user::update(&state.db.pool, id, replaced)
        .await
        .map_err(|e| write_error(e, Some(id)))?;
    Ok(Json(updated))
}

/// PATCH /api/users/{id}/
pub async fn partial_update(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    Payload(payload): Payload<UserUpdate>,
) -> AppResult<Json<User>> {
    let current = user::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let merged = payload.apply_to(&current);
    validate(&merged)?;
    let updated = user::update(&state.db.pool, id, merged)
        .await
        .map_err(|e| write_error(e, Some(id)))?;
    Ok(Json(updated))
}

/// DELETE /api/users/{id}/ - 同时删除该用户的令牌
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    user::delete(&state.db.pool, id)
        .await
        .map_err(|e| or_missing(e, not_found(id)))?;
    tracing::info!(user_id = id, deleted_by = %current_user.username, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
