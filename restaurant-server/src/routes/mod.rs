//! 路由装配
//!
//! [`build_router`] 只注册路由，[`build_app`] 再叠加 tower 中间件。
//! HTTP 服务器和集成测试都走 [`build_app`]。

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;
use crate::middleware;
use crate::pages;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
///
/// 受保护的路由各自用 `route_layer` 挂认证中间件，所以需要 state。
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        // HTML pages - public
        .merge(pages::router())
        // JSON booking endpoint - public
        .merge(api::bookings::router())
        // Health - public
        .merge(api::health::router())
        // Token issue - public
        .merge(api::token::router())
        // Registration / login public, me / logout protected
        .merge(api::accounts::router(state))
        // REST API - token required
        .merge(api::menu_items::router(state))
        .merge(api::tables::router(state))
        .merge(api::users::router(state))
        .merge(api::message::router(state))
}

/// Build a fully configured application with all middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router(state)
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
}
