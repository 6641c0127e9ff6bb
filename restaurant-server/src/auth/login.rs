//! Credential check + token issue, shared by `/api/token/` and
//! `/auth/token/login/`

use std::time::Duration;

use shared::client::LoginRequest;

use crate::auth::{password, token};
use crate::core::ServerState;
use crate::db::repository::{token as token_repo, user};
use crate::security_log;
use crate::utils::AppError;
use crate::utils::validation::{MAX_PASSWORD_LEN, MAX_USER_FIELD_LEN, validate_required_text};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 200;

/// Verify username/password and return the user's token, creating one
/// if they have none. Repeated logins get the same key.
pub async fn obtain_token(state: &ServerState, req: &LoginRequest) -> Result<String, AppError> {
    validate_required_text(&req.username, "username", MAX_USER_FIELD_LEN)?;
    validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;

    let creds = user::find_credentials(&state.db.pool, &req.username).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let creds = match creds {
        Some(c) => match c.password_hash.as_deref() {
            Some(hash) if password::verify_password(&req.password, hash) => c,
            _ => {
                security_log!("WARN", "login_failed", username = req.username.clone());
                return Err(AppError::invalid_credentials());
            }
        },
        None => {
            security_log!("WARN", "login_unknown_user", username = req.username.clone());
            return Err(AppError::invalid_credentials());
        }
    };

    let candidate = token::generate_key()
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;
    let now = chrono::Utc::now().timestamp_millis();
    let key = token_repo::get_or_create(&state.db.pool, creds.id, &candidate, now).await?;

    tracing::info!(user_id = creds.id, username = %creds.username, "User logged in successfully");
    Ok(key)
}
