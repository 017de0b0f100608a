//! Item CRUD.
//!
//! Item update writes name, price and stock directly; movements and orders
//! are the only other writers of the stock field.

use serde::Serialize;
use sqlx::PgPool;

use stockroom_core::{ItemId, Page};

use crate::db;
use crate::error::AppError;
use crate::models::{CreateItemInput, Item, UpdateItemInput};

/// Confirmation returned by [`delete`].
#[derive(Debug, Serialize)]
pub struct DeletedItem {
    /// ID of the removed item.
    pub deleted_item_id: ItemId,
    /// Human-readable confirmation.
    pub info: String,
}

/// List items, one page at a time.
pub async fn list(pool: &PgPool, page: u32, size: u32) -> Result<Page<Item>, AppError> {
    Ok(db::items::page(pool, page, size).await?)
}

/// Get one item.
pub async fn get(pool: &PgPool, id: ItemId) -> Result<Item, AppError> {
    db::items::get(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item not found with id: {id}")))
}

/// Create an item.
pub async fn create(pool: &PgPool, input: CreateItemInput) -> Result<Item, AppError> {
    let mut tx = pool.begin().await?;
    let item = db::items::insert(&mut tx, &input.name, input.price, input.stock).await?;
    tx.commit().await?;
    Ok(item)
}

/// Update an item's name, price and stock.
pub async fn update(pool: &PgPool, id: ItemId, input: UpdateItemInput) -> Result<Item, AppError> {
    let mut tx = pool.begin().await?;
    let item = db::items::update(&mut tx, id, &input.name, input.price, input.stock)
        .await
        .map_err(|err| match err {
            db::RepositoryError::NotFound => {
                AppError::NotFound(format!("Item with ID {id} not found"))
            }
            other => other.into(),
        })?;
    tx.commit().await?;
    Ok(item)
}

/// Delete an item.
pub async fn delete(pool: &PgPool, id: ItemId) -> Result<DeletedItem, AppError> {
    let mut tx = pool.begin().await?;
    let deleted = db::items::delete(&mut tx, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Item with ID {id} not found")));
    }
    tx.commit().await?;

    Ok(DeletedItem {
        deleted_item_id: id,
        info: "The item was removed from the database.".to_string(),
    })
}
