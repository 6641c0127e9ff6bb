//! `/bookings` JSON 端点 (公共)
//!
//! | 方法 | 说明 |
//! |------|------|
//! | GET | `?date=YYYY-MM-DD` 当天的预订，默认今天 |
//! | POST | 预订一个时段，时段已占用时返回冲突信息 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/bookings", get(handler::list).post(handler::reserve))
}
