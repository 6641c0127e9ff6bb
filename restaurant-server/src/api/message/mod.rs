//! Protected message 路由

use axum::{Json, Router, middleware, routing::get};
use shared::client::ProtectedMessage;

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/api/message/", get(protected_message))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}

/// GET /api/message/ - 验证令牌是否有效
async fn protected_message() -> Json<ProtectedMessage> {
    Json(ProtectedMessage {
        message: "This view is protected".to_string(),
    })
}
