//! Database operations for `PostgreSQL`.
//!
//! ## Tables
//!
//! - `items` - stocked items; `stock` is the single source of truth
//! - `inventory_movements` - transfers in and withdrawals out
//! - `orders` - priced stock claims, keyed by sequential order number
//!
//! All queries are runtime-checked (`sqlx::query_as` with `FromRow` row
//! structs), so the workspace builds without a database. Mutating service
//! operations run inside one transaction; write helpers therefore take a
//! `&mut PgConnection` so they work both from a pool connection and from
//! inside a transaction, while read helpers take the pool directly.
//!
//! # Migrations
//!
//! Migrations live in `crates/server/migrations/` and are embedded with
//! `sqlx::migrate!`; they run at startup.

pub mod items;
pub mod movements;
pub mod orders;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Row offset for a zero-based page. Saturates instead of overflowing, so
/// absurd `page`/`size` combinations yield an empty page rather than a
/// negative OFFSET.
pub(crate) fn page_offset(page: u32, size: u32) -> i64 {
    i64::from(page).saturating_mul(i64::from(size))
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Run the embedded migrations.
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_offset_is_page_times_size() {
        assert_eq!(page_offset(0, 10), 0);
        assert_eq!(page_offset(3, 25), 75);
    }

    #[test]
    fn page_offset_saturates_for_extreme_queries() {
        // u32::MAX * u32::MAX does not fit in i64; the offset must clamp
        // instead of panicking or going negative.
        assert_eq!(page_offset(u32::MAX, u32::MAX), i64::MAX);
    }
}
