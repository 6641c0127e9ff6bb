//! API 路由模块
//!
//! # 结构
//!
//! - [`bookings`] - `/bookings` JSON 预订端点 (公共)
//! - [`health`] - 健康检查
//! - [`token`] - 令牌签发
//! - [`accounts`] - 注册、当前用户、令牌登录/登出
//! - [`menu_items`] - 菜单 CRUD (需认证)
//! - [`tables`] - 预订 CRUD (需认证)
//! - [`users`] - 用户 CRUD (需认证)
//! - [`message`] - 受保护的测试消息

pub mod accounts;
pub mod bookings;
pub mod health;
pub mod menu_items;
pub mod message;
pub mod tables;
pub mod token;
pub mod users;

use crate::db::repository::RepoError;
use crate::utils::{AppError, ErrorCode};

// Re-export common types for handlers
pub use crate::utils::AppResult;

/// 把仓库层的 NotFound 替换为具体实体的 404，其余错误原样转换
pub(crate) fn or_missing(err: RepoError, missing: AppError) -> AppError {
    match err {
        RepoError::NotFound(_) => missing,
        other => other.into(),
    }
}

/// 用户名重复
pub(crate) fn username_taken() -> AppError {
    AppError::with_message(
        ErrorCode::UsernameExists,
        "A user with that username already exists.",
    )
    .with_detail("field", "username")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_missing_replaces_not_found() {
        let missing = AppError::new(ErrorCode::MenuItemNotFound);
        let err = or_missing(RepoError::NotFound("menu_item 9".into()), missing);
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);

        let err = or_missing(
            RepoError::Validation("bad".into()),
            AppError::new(ErrorCode::MenuItemNotFound),
        );
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_username_taken_has_field_detail() {
        let err = username_taken();
        assert_eq!(err.code, ErrorCode::UsernameExists);
        let details = err.details.unwrap();
        assert_eq!(details["field"], "username");
    }
}
