//! Request extractors that reject with [`AppError`] instead of plain text
//!
//! - [`Payload`] accepts `application/json` and
//!   `application/x-www-form-urlencoded` bodies
//! - [`IdPath`] parses an integer `{id}` segment, unknown shapes are 404

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
};
use serde::de::DeserializeOwned;

use crate::utils::{AppError, ErrorCode};

/// Request body deserialized from JSON or an urlencoded form
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<T> Payload<T>
where
    T: DeserializeOwned,
{
    /// Decode raw bytes according to the request's content type.
    ///
    /// Anything that is not declared as a form is treated as JSON.
    pub fn decode(content_type: Option<&str>, body: &[u8]) -> Result<T, AppError> {
        let is_form = content_type
            .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        if is_form {
            serde_urlencoded::from_bytes(body)
                .map_err(|e| AppError::validation(format!("Invalid form data: {e}")))
        } else {
            serde_json::from_slice(body)
                .map_err(|e| AppError::validation(format!("Invalid JSON body: {e}")))
        }
    }
}

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;

        Self::decode(content_type.as_deref(), &body).map(Payload)
    }
}

/// Integer primary key taken from the `{id}` path segment
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::new(ErrorCode::NotFound))?;
        raw.parse::<i64>()
            .map(IdPath)
            .map_err(|_| AppError::new(ErrorCode::NotFound))
    }
}
