//! Token 路由 (公共)

use axum::{Json, Router, extract::State, routing::post};
use shared::client::{LoginRequest, TokenResponse};

use crate::auth::obtain_token;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::extract::Payload;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/token/", post(issue))
}

/// POST /api/token/ - 用户名密码换取令牌 (已有令牌则复用)
async fn issue(
    State(state): State<ServerState>,
    Payload(req): Payload<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = obtain_token(&state, &req).await?;
    Ok(Json(TokenResponse { token }))
}
