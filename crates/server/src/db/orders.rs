//! Database operations for orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use stockroom_core::{ItemId, OrderNo, Page};

use super::RepositoryError;
use crate::models::{ItemSummary, Order, OrderWithItem};

/// Internal row type for order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    order_no: String,
    item_id: i64,
    quantity: i32,
    price: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            order_no: OrderNo::from_raw(row.order_no),
            item_id: ItemId::new(row.item_id),
            quantity: row.quantity,
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Internal row type for orders joined with their item summary.
#[derive(Debug, sqlx::FromRow)]
struct OrderWithItemRow {
    order_no: String,
    quantity: i32,
    price: Decimal,
    item_id: i64,
    item_name: String,
    item_price: Decimal,
}

impl From<OrderWithItemRow> for OrderWithItem {
    fn from(row: OrderWithItemRow) -> Self {
        Self {
            order_no: OrderNo::from_raw(row.order_no),
            item: ItemSummary {
                item_id: ItemId::new(row.item_id),
                name: row.item_name,
                price: row.item_price,
            },
            quantity: row.quantity,
            price: row.price,
        }
    }
}

const COLUMNS: &str = "order_no, item_id, quantity, price, created_at, updated_at";

const JOINED_COLUMNS: &str = "o.order_no, o.quantity, o.price, \
     i.id AS item_id, i.name AS item_name, i.price AS item_price";

/// List orders in creation order, with their item summaries.
pub async fn page_with_item(
    pool: &PgPool,
    page: u32,
    size: u32,
) -> Result<Page<OrderWithItem>, RepositoryError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, OrderWithItemRow>(&format!(
        "SELECT {JOINED_COLUMNS} FROM orders o \
         INNER JOIN items i ON i.id = o.item_id \
         ORDER BY o.created_at, o.order_no LIMIT $1 OFFSET $2"
    ))
    .bind(i64::from(size))
    .bind(super::page_offset(page, size))
    .fetch_all(pool)
    .await?;

    let content = rows.into_iter().map(Into::into).collect();
    Ok(Page::new(content, page, size, total.unsigned_abs()))
}

/// Get an order by its order number, with its item summary.
pub async fn get_with_item(
    pool: &PgPool,
    order_no: &OrderNo,
) -> Result<Option<OrderWithItem>, RepositoryError> {
    let row = sqlx::query_as::<_, OrderWithItemRow>(&format!(
        "SELECT {JOINED_COLUMNS} FROM orders o \
         INNER JOIN items i ON i.id = o.item_id \
         WHERE o.order_no = $1"
    ))
    .bind(order_no.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

/// Get an order by its order number with an exclusive row lock.
pub async fn get_for_update(
    conn: &mut PgConnection,
    order_no: &OrderNo,
) -> Result<Option<Order>, RepositoryError> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {COLUMNS} FROM orders WHERE order_no = $1 FOR UPDATE"
    ))
    .bind(order_no.as_str())
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(Into::into))
}

/// The most recently created order by the numeric suffix of its identifier,
/// locked until the transaction commits so concurrent creates cannot both
/// derive the same next number.
///
/// A malformed suffix sorts last; if such a row is the only one it is still
/// returned, and the sequencer's parse fallback takes over from there.
pub async fn last_for_update(conn: &mut PgConnection) -> Result<Option<Order>, RepositoryError> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {COLUMNS} FROM orders \
         ORDER BY CASE WHEN substring(order_no FROM 2) ~ '^[0-9]+$' \
                       THEN substring(order_no FROM 2)::bigint END DESC NULLS LAST \
         LIMIT 1 FOR UPDATE"
    ))
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(Into::into))
}

/// Insert a new order.
pub async fn insert(
    conn: &mut PgConnection,
    order_no: &OrderNo,
    item_id: ItemId,
    quantity: i32,
    price: Decimal,
) -> Result<Order, RepositoryError> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "INSERT INTO orders (order_no, item_id, quantity, price) \
         VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
    ))
    .bind(order_no.as_str())
    .bind(item_id)
    .bind(quantity)
    .bind(price)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row.into())
}

/// Update an order's item, quantity and price.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the order doesn't exist.
pub async fn update(
    conn: &mut PgConnection,
    order_no: &OrderNo,
    item_id: ItemId,
    quantity: i32,
    price: Decimal,
) -> Result<Order, RepositoryError> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "UPDATE orders SET item_id = $2, quantity = $3, price = $4, updated_at = now() \
         WHERE order_no = $1 RETURNING {COLUMNS}"
    ))
    .bind(order_no.as_str())
    .bind(item_id)
    .bind(quantity)
    .bind(price)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(RepositoryError::NotFound)?;

    Ok(row.into())
}

/// Delete an order.
///
/// # Returns
///
/// Returns `true` if the order was deleted, `false` if it didn't exist.
pub async fn delete(conn: &mut PgConnection, order_no: &OrderNo) -> Result<bool, RepositoryError> {
    let result = sqlx::query("DELETE FROM orders WHERE order_no = $1")
        .bind(order_no.as_str())
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
