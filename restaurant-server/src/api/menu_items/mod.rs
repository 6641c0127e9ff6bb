//! Menu Item API 模块

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/api/menu-items/", get(handler::list).post(handler::create))
        .route(
            "/api/menu-items/{id}/",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::partial_update)
                .delete(handler::delete),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
