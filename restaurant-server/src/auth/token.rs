//! Opaque auth tokens
//!
//! Tokens are 40 lowercase hex chars (20 random bytes) stored in the
//! `auth_token` table, so logging out revokes them immediately.

use ring::rand::{SecureRandom, SystemRandom};
use shared::models::User;
use thiserror::Error;

/// 令牌字节数 (hex 编码后 40 字符)
pub const TOKEN_BYTES: usize = 20;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("令牌生成失败")]
    GenerationFailed,
}

/// 生成随机令牌
pub fn generate_key() -> Result<String, TokenError> {
    let rng = SystemRandom::new();
    let mut bytes = [0u8; TOKEN_BYTES];
    rng.fill(&mut bytes)
        .map_err(|_| TokenError::GenerationFailed)?;
    Ok(hex::encode(bytes))
}

/// 从 Authorization 头提取令牌
///
/// 支持 `Token <key>` 和 `Bearer <key>` 两种格式
pub fn extract_from_header(header: &str) -> Option<&str> {
    let key = header
        .strip_prefix("Token ")
        .or_else(|| header.strip_prefix("Bearer "))?
        .trim();
    if key.is_empty() { None } else { Some(key) }
}

/// 当前认证用户
///
/// 由 [`require_auth`](super::require_auth) 注入请求扩展，
/// 也可作为提取器直接使用。
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// 用户 ID
    pub id: i64,
    /// 用户名
    pub username: String,
    /// 本次请求使用的令牌 (logout 时删除)
    pub token: String,
}

impl CurrentUser {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            token: token.into(),
        }
    }
}
