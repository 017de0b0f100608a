//! Database operations for items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use stockroom_core::{ItemId, Page};

use super::RepositoryError;
use crate::models::Item;

/// Internal row type for item queries.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    price: Decimal,
    stock: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: ItemId::new(row.id),
            name: row.name,
            price: row.price,
            stock: row.stock,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const COLUMNS: &str = "id, name, price, stock, created_at, updated_at";

/// List items in id order.
pub async fn page(pool: &PgPool, page: u32, size: u32) -> Result<Page<Item>, RepositoryError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, ItemRow>(&format!(
        "SELECT {COLUMNS} FROM items ORDER BY id LIMIT $1 OFFSET $2"
    ))
    .bind(i64::from(size))
    .bind(super::page_offset(page, size))
    .fetch_all(pool)
    .await?;

    let content = rows.into_iter().map(Into::into).collect();
    Ok(Page::new(content, page, size, total.unsigned_abs()))
}

/// Get an item by ID.
pub async fn get(pool: &PgPool, id: ItemId) -> Result<Option<Item>, RepositoryError> {
    let row = sqlx::query_as::<_, ItemRow>(&format!("SELECT {COLUMNS} FROM items WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Into::into))
}

/// Get an item by ID with an exclusive row lock, held until the enclosing
/// transaction commits. Call this before any stock math.
pub async fn get_for_update(
    conn: &mut PgConnection,
    id: ItemId,
) -> Result<Option<Item>, RepositoryError> {
    let row = sqlx::query_as::<_, ItemRow>(&format!(
        "SELECT {COLUMNS} FROM items WHERE id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(Into::into))
}

/// Insert a new item.
pub async fn insert(
    conn: &mut PgConnection,
    name: &str,
    price: Decimal,
    stock: i32,
) -> Result<Item, RepositoryError> {
    let row = sqlx::query_as::<_, ItemRow>(&format!(
        "INSERT INTO items (name, price, stock) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
    ))
    .bind(name)
    .bind(price)
    .bind(stock)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row.into())
}

/// Update all item fields.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the item doesn't exist.
pub async fn update(
    conn: &mut PgConnection,
    id: ItemId,
    name: &str,
    price: Decimal,
    stock: i32,
) -> Result<Item, RepositoryError> {
    let row = sqlx::query_as::<_, ItemRow>(&format!(
        "UPDATE items SET name = $2, price = $3, stock = $4, updated_at = now() \
         WHERE id = $1 RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(name)
    .bind(price)
    .bind(stock)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(RepositoryError::NotFound)?;

    Ok(row.into())
}

/// Write a reconciled stock value.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the item doesn't exist.
pub async fn update_stock(
    conn: &mut PgConnection,
    id: ItemId,
    stock: i32,
) -> Result<(), RepositoryError> {
    let result = sqlx::query("UPDATE items SET stock = $2, updated_at = now() WHERE id = $1")
        .bind(id)
        .bind(stock)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

/// Delete an item.
///
/// # Returns
///
/// Returns `true` if the item was deleted, `false` if it didn't exist.
pub async fn delete(conn: &mut PgConnection, id: ItemId) -> Result<bool, RepositoryError> {
    let result = sqlx::query("DELETE FROM items WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
