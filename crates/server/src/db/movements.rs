//! Database operations for inventory movements.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use stockroom_core::{ItemId, MovementId, MovementKind, Page};

use super::RepositoryError;
use crate::models::{Item, Movement, MovementWithItem};

/// Internal row type for movement queries.
#[derive(Debug, sqlx::FromRow)]
struct MovementRow {
    id: i64,
    item_id: i64,
    quantity: i32,
    kind: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MovementRow> for Movement {
    type Error = RepositoryError;

    fn try_from(row: MovementRow) -> Result<Self, Self::Error> {
        let kind = MovementKind::from_code(&row.kind).ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "movement {} has unknown kind {:?}",
                row.id, row.kind
            ))
        })?;
        Ok(Self {
            id: MovementId::new(row.id),
            item_id: ItemId::new(row.item_id),
            quantity: row.quantity,
            kind,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Internal row type for movements joined with their item.
#[derive(Debug, sqlx::FromRow)]
struct MovementWithItemRow {
    id: i64,
    item_id: i64,
    quantity: i32,
    kind: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    item_name: String,
    item_price: Decimal,
    item_stock: i32,
    item_created_at: DateTime<Utc>,
    item_updated_at: DateTime<Utc>,
}

impl TryFrom<MovementWithItemRow> for MovementWithItem {
    type Error = RepositoryError;

    fn try_from(row: MovementWithItemRow) -> Result<Self, Self::Error> {
        let kind = MovementKind::from_code(&row.kind).ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "movement {} has unknown kind {:?}",
                row.id, row.kind
            ))
        })?;
        Ok(Self {
            movement: Movement {
                id: MovementId::new(row.id),
                item_id: ItemId::new(row.item_id),
                quantity: row.quantity,
                kind,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            item: Item {
                id: ItemId::new(row.item_id),
                name: row.item_name,
                price: row.item_price,
                stock: row.item_stock,
                created_at: row.item_created_at,
                updated_at: row.item_updated_at,
            },
        })
    }
}

const COLUMNS: &str = "id, item_id, quantity, kind, created_at, updated_at";

const JOINED_COLUMNS: &str = "m.id, m.item_id, m.quantity, m.kind, m.created_at, m.updated_at, \
     i.name AS item_name, i.price AS item_price, i.stock AS item_stock, \
     i.created_at AS item_created_at, i.updated_at AS item_updated_at";

/// List movements in id order, with their item snapshots.
pub async fn page_with_item(
    pool: &PgPool,
    page: u32,
    size: u32,
) -> Result<Page<MovementWithItem>, RepositoryError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_movements")
        .fetch_one(pool)
        .await?;

    let rows = sqlx::query_as::<_, MovementWithItemRow>(&format!(
        "SELECT {JOINED_COLUMNS} FROM inventory_movements m \
         INNER JOIN items i ON i.id = m.item_id \
         ORDER BY m.id LIMIT $1 OFFSET $2"
    ))
    .bind(i64::from(size))
    .bind(super::page_offset(page, size))
    .fetch_all(pool)
    .await?;

    let content = rows
        .into_iter()
        .map(MovementWithItem::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Page::new(content, page, size, total.unsigned_abs()))
}

/// Get a movement by ID, with its item snapshot.
pub async fn get_with_item(
    pool: &PgPool,
    id: MovementId,
) -> Result<Option<MovementWithItem>, RepositoryError> {
    let row = sqlx::query_as::<_, MovementWithItemRow>(&format!(
        "SELECT {JOINED_COLUMNS} FROM inventory_movements m \
         INNER JOIN items i ON i.id = m.item_id \
         WHERE m.id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(MovementWithItem::try_from).transpose()
}

/// Get a movement by ID with an exclusive row lock, so no two edits of the
/// same movement can interleave their stock reconciliation.
pub async fn get_for_update(
    conn: &mut PgConnection,
    id: MovementId,
) -> Result<Option<Movement>, RepositoryError> {
    let row = sqlx::query_as::<_, MovementRow>(&format!(
        "SELECT {COLUMNS} FROM inventory_movements WHERE id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    row.map(Movement::try_from).transpose()
}

/// Insert a new movement.
pub async fn insert(
    conn: &mut PgConnection,
    item_id: ItemId,
    quantity: i32,
    kind: MovementKind,
) -> Result<Movement, RepositoryError> {
    let row = sqlx::query_as::<_, MovementRow>(&format!(
        "INSERT INTO inventory_movements (item_id, quantity, kind) \
         VALUES ($1, $2, $3) RETURNING {COLUMNS}"
    ))
    .bind(item_id)
    .bind(quantity)
    .bind(kind.as_code())
    .fetch_one(&mut *conn)
    .await?;

    row.try_into()
}

/// Update a movement's quantity and kind.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if the movement doesn't exist.
pub async fn update(
    conn: &mut PgConnection,
    id: MovementId,
    quantity: i32,
    kind: MovementKind,
) -> Result<Movement, RepositoryError> {
    let row = sqlx::query_as::<_, MovementRow>(&format!(
        "UPDATE inventory_movements SET quantity = $2, kind = $3, updated_at = now() \
         WHERE id = $1 RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(quantity)
    .bind(kind.as_code())
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(RepositoryError::NotFound)?;

    row.try_into()
}

/// Delete a movement.
///
/// # Returns
///
/// Returns `true` if the movement was deleted, `false` if it didn't exist.
pub async fn delete(conn: &mut PgConnection, id: MovementId) -> Result<bool, RepositoryError> {
    let result = sqlx::query("DELETE FROM inventory_movements WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
