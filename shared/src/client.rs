//! Auth request/response types shared between server and client

use serde::{Deserialize, Serialize};

/// Credentials for `/api/token/` and `/auth/token/login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `/api/token/` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `/auth/token/login/` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenResponse {
    pub auth_token: String,
}

/// Account registration (`/auth/users/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
}

/// Registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Body of `/api/message/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedMessage {
    pub message: String,
}
