//! Data models
//!
//! Shared between the server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod booking;
pub mod menu_item;
pub mod user;

// Re-exports
pub use booking::*;
pub use menu_item::*;
pub use user::*;
