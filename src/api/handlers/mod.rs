//! Route handlers.
//!
//! Each module owns one resource; request/response records shared with the
//! `OpenAPI` document live in `types`.

pub mod calculator;
pub mod files;
pub mod health;
pub mod items;
pub mod messages;
pub mod models;
pub mod products;
pub mod types;
pub mod users;

use crate::api::error::ApiError;

/// Fallback for requests no route matches.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
