//! Shared types for the restaurant server
//!
//! Entity models, request payloads, auth DTOs and the unified error
//! system used by the server and by any Rust client of its API.

pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
