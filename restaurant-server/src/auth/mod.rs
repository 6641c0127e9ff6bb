//! 认证模块
//!
//! - [`CurrentUser`] - 当前用户上下文
//! - [`require_auth`] - 认证中间件
//! - [`token`] - 令牌生成与 Authorization 头解析
//! - [`password`] - Argon2 密码哈希
//! - [`login`] - 用户名密码换取令牌

pub mod extractor;
pub mod login;
pub mod middleware;
pub mod password;
pub mod token;

pub use login::obtain_token;
pub use middleware::require_auth;
pub use token::CurrentUser;
