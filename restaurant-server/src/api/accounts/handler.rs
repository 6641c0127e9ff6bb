//! Account Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::client::{AuthTokenResponse, LoginRequest, RegisterRequest, RegisteredUser};
use shared::models::{User, UserCreate};

use crate::api::username_taken;
use crate::auth::{CurrentUser, obtain_token, password};
use crate::core::ServerState;
use crate::db::repository::{RepoError, token as token_repo, user};
use crate::security_log;
use crate::utils::extract::Payload;
use crate::utils::validation::{MAX_EMAIL_LEN, validate_password, validate_text_len, validate_username};
use crate::utils::{AppError, AppResult, ErrorCode};

/// POST /auth/users/ - 注册
pub async fn register(
    State(state): State<ServerState>,
    Payload(req): Payload<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisteredUser>)> {
    validate_username(&req.username)?;
    validate_text_len(&req.email, "email", MAX_EMAIL_LEN)?;
    validate_password(&req.password, state.config.min_password_len)?;

    let hash = password::hash_password(&req.password)?;
    let data = UserCreate {
        username: req.username,
        email: req.email,
        first_name: String::new(),
        last_name: String::new(),
    };
    let created = user::create_with_password(&state.db.pool, data, &hash)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => username_taken(),
            other => other.into(),
        })?;

    tracing::info!(user_id = created.id, username = %created.username, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisteredUser {
            id: created.id,
            username: created.username,
            email: created.email,
        }),
    ))
}

/// GET /auth/users/me/
pub async fn me(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<User>> {
    let me = user::find_by_id(&state.db.pool, current_user.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;
    Ok(Json(me))
}

/// POST /auth/token/login/
pub async fn login(
    State(state): State<ServerState>,
    Payload(req): Payload<LoginRequest>,
) -> AppResult<Json<AuthTokenResponse>> {
    let auth_token = obtain_token(&state, &req).await?;
    Ok(Json(AuthTokenResponse { auth_token }))
}

/// POST /auth/token/logout/ - 删除当前令牌
pub async fn logout(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<StatusCode> {
    token_repo::delete_by_key(&state.db.pool, &current_user.token).await?;
    security_log!(
        "INFO",
        "logout",
        user_id = current_user.id,
        username = current_user.username.clone()
    );
    Ok(StatusCode::NO_CONTENT)
}
