//! User API 模块 (user viewset)
//!
//! 通过此接口创建的用户没有可用密码，无法登录。

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/api/users/", get(handler::list).post(handler::create))
        .route(
            "/api/users/{id}/",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::partial_update)
                .delete(handler::delete),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
