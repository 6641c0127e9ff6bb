//! 认证中间件
//!
//! 为受保护的路由提供令牌认证

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, token};
use crate::core::ServerState;
use crate::db::repository::token as token_repo;
use crate::security_log;
use crate::utils::AppError;

/// 认证中间件 - 要求有效令牌
///
/// 从 `Authorization: Token <key>` (或 `Bearer <key>`) 头提取令牌并查库。
/// 验证成功后将 [`CurrentUser`] 注入请求扩展，并复制到响应扩展供请求日志使用。
///
/// 通过 `route_layer` 挂在受保护的路由上，公共路由不经过此中间件。
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 NotAuthenticated |
/// | 格式错误 / 未知令牌 | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_preflight(&req) {
        return Ok(next.run(req).await);
    }

    let user = authenticate(&state, req.headers(), req.uri()).await?;
    req.extensions_mut().insert(user.clone());
    let mut response = next.run(req).await;
    response.extensions_mut().insert(user);
    Ok(response)
}

/// CORS 预检: OPTIONS 且带 `Access-Control-Request-Method`
fn is_preflight(req: &Request) -> bool {
    req.method() == http::Method::OPTIONS
        && req
            .headers()
            .contains_key(http::header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// Resolve the Authorization header to a [`CurrentUser`]
pub(crate) async fn authenticate(
    state: &ServerState,
    headers: &http::HeaderMap,
    uri: &http::Uri,
) -> Result<CurrentUser, AppError> {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let key = match auth_header {
        Some(header) => match token::extract_from_header(header) {
            Some(key) => key,
            None => {
                security_log!("WARN", "auth_bad_scheme", uri = format!("{:?}", uri));
                return Err(AppError::invalid_token("Invalid authorization header"));
            }
        },
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", uri));
            return Err(AppError::unauthorized());
        }
    };

    match token_repo::find_user_by_key(&state.db.pool, key).await? {
        Some(user) => Ok(CurrentUser::new(user, key)),
        None => {
            security_log!("WARN", "auth_failed", uri = format!("{:?}", uri));
            Err(AppError::invalid_token("Invalid token."))
        }
    }
}
