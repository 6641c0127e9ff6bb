//! 页面路由 (HTML)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 首页 |
//! | /about/ | GET | 关于 |
//! | /menu/ | GET | 菜单列表 |
//! | /menu_item/{id}/ | GET | 单个菜品 |
//! | /book/ | GET, POST | 预订表单 |
//! | /reservations/ | GET | 预订列表 |

mod form;
mod handler;
mod render;

pub use form::{BookingForm, FieldError};
pub use render::PageRenderer;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/about/", get(handler::about))
        .route("/menu/", get(handler::menu))
        .route("/menu_item/{id}/", get(handler::menu_item))
        .route("/book/", get(handler::book_form).post(handler::book_submit))
        .route("/reservations/", get(handler::reservations))
}
