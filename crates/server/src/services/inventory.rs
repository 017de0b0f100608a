//! Inventory movement operations.
//!
//! Creating or editing a movement reconciles the item's stock through the
//! ledger and persists the item and the movement in one transaction, with
//! the item row locked for the duration. Deleting a movement removes only
//! the record; the stock effect it once had is kept.

use serde::Serialize;
use sqlx::PgPool;

use stockroom_core::{MovementId, Page, ledger};

use crate::db;
use crate::error::AppError;
use crate::models::{MovementInput, MovementWithItem};

/// Confirmation returned by [`delete`].
#[derive(Debug, Serialize)]
pub struct DeletedMovement {
    /// ID of the removed movement.
    pub deleted_movement_id: MovementId,
    /// Human-readable confirmation.
    pub info: String,
}

/// List movements, one page at a time, with their item snapshots.
pub async fn list(pool: &PgPool, page: u32, size: u32) -> Result<Page<MovementWithItem>, AppError> {
    Ok(db::movements::page_with_item(pool, page, size).await?)
}

/// Get one movement with its item snapshot.
pub async fn get(pool: &PgPool, id: MovementId) -> Result<MovementWithItem, AppError> {
    db::movements::get_with_item(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movement not found with id: {id}")))
}

/// Record a movement and apply its stock effect.
pub async fn create(pool: &PgPool, input: MovementInput) -> Result<MovementWithItem, AppError> {
    let mut tx = pool.begin().await?;

    let mut item = db::items::get_for_update(&mut tx, input.item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item not found with id: {}", input.item_id)))?;

    item.stock = ledger::apply_create(item.stock, input.quantity, input.kind)?;

    db::items::update_stock(&mut tx, item.id, item.stock).await?;
    let movement = db::movements::insert(&mut tx, input.item_id, input.quantity, input.kind).await?;
    tx.commit().await?;

    tracing::info!(
        item = %item.name,
        kind = %movement.kind,
        quantity = movement.quantity,
        stock = item.stock,
        "stock updated by movement"
    );

    Ok(MovementWithItem { movement, item })
}

/// Edit a movement, re-deriving the item's stock delta.
pub async fn update(
    pool: &PgPool,
    id: MovementId,
    input: MovementInput,
) -> Result<MovementWithItem, AppError> {
    let mut tx = pool.begin().await?;

    let existing = db::movements::get_for_update(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movement with ID {id} not found")))?;

    // The movement stays attached to its item; the request's item_id is not
    // allowed to retarget it.
    let mut item = db::items::get_for_update(&mut tx, existing.item_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Item not found with id: {}", existing.item_id))
        })?;

    item.stock = ledger::apply_update(
        item.stock,
        existing.quantity,
        existing.kind,
        input.quantity,
        input.kind,
    )?;

    db::items::update_stock(&mut tx, item.id, item.stock).await?;
    let movement = db::movements::update(&mut tx, id, input.quantity, input.kind).await?;
    tx.commit().await?;

    tracing::info!(
        item = %item.name,
        old_kind = %existing.kind,
        old_quantity = existing.quantity,
        new_kind = %movement.kind,
        new_quantity = movement.quantity,
        stock = item.stock,
        "stock updated by movement edit"
    );

    Ok(MovementWithItem { movement, item })
}

/// Remove a movement record. Stock is not reversed.
pub async fn delete(pool: &PgPool, id: MovementId) -> Result<DeletedMovement, AppError> {
    let mut tx = pool.begin().await?;
    let deleted = db::movements::delete(&mut tx, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Movement with ID {id} not found")));
    }
    tx.commit().await?;

    Ok(DeletedMovement {
        deleted_movement_id: id,
        info: "The movement was removed from the database.".to_string(),
    })
}
