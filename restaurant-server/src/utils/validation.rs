//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so every write path
//! goes through these before touching the repository.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Menu item names and booking names
pub const MAX_NAME_LEN: usize = 200;

/// Menu item descriptions
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Usernames, first and last names
pub const MAX_USER_FIELD_LEN: usize = 150;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must not be empty"),
        ));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string, possibly empty, is within the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

/// Usernames: required, at most 150 chars of letters, digits and `@ . + - _`.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    validate_required_text(username, "username", MAX_USER_FIELD_LEN)?;
    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_');
    if !username.chars().all(allowed) {
        return Err(AppError::invalid_field(
            "username",
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        ));
    }
    Ok(())
}

/// Validate a new password against the configured minimum.
pub fn validate_password(password: &str, min_len: usize) -> Result<(), AppError> {
    let len = password.chars().count();
    if len < min_len {
        return Err(AppError::with_message(
            shared::ErrorCode::PasswordTooShort,
            format!("This password is too short. It must contain at least {min_len} characters."),
        )
        .with_detail("field", "password"));
    }
    validate_text_len(password, "password", MAX_PASSWORD_LEN)
}
