//! HTTP routes.

pub mod inventory;
pub mod items;
pub mod orders;

use axum::{Router, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::state::AppState;

/// Pagination query parameters: `?page=` (zero-based) and `?size=`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,
    /// Page size.
    #[serde(default = "default_page_size")]
    pub size: u32,
}

const fn default_page_size() -> u32 {
    10
}

/// Build the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(items::router())
        .merge(inventory::router())
        .merge(orders::router())
}

async fn health() -> StatusCode {
    StatusCode::OK
}
