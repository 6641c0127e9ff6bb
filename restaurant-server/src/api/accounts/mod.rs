//! 账户路由 - 注册、当前用户、令牌登录/登出
//!
//! | 路径 | 方法 | 认证 |
//! |------|------|------|
//! | /auth/users/ | POST | 无 |
//! | /auth/users/me/ | GET | 令牌 |
//! | /auth/token/login/ | POST | 无 |
//! | /auth/token/logout/ | POST | 令牌 |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let public_routes = Router::new()
        .route("/auth/users/", post(handler::register))
        .route("/auth/token/login/", post(handler::login));

    let protected_routes = Router::new()
        .route("/auth/users/me/", get(handler::me))
        .route("/auth/token/logout/", post(handler::logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public_routes.merge(protected_routes)
}
