//! Table booking API 模块 (booking viewset)
//!
//! 不做时段冲突检查，冲突规则只在 `/bookings` 生效。

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/api/tables/", get(handler::list).post(handler::create))
        .route(
            "/api/tables/{id}/",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::partial_update)
                .delete(handler::delete),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
