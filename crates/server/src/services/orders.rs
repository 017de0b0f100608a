//! Order fulfillment: create, update and delete orders.
//!
//! An order is a durable claim on stock. Removing or redirecting that claim
//! always gives the stock back before any new claim is applied, so units are
//! never double-counted. All stock arithmetic goes through the ledger; order
//! numbers are allocated under a lock on the last-order row.

use serde::Serialize;
use sqlx::PgPool;

use stockroom_core::{MovementKind, OrderNo, Page, ledger, pricing};

use crate::db;
use crate::error::AppError;
use crate::models::{ItemSummary, OrderInput, OrderWithItem};

/// Confirmation returned by [`delete`].
#[derive(Debug, Serialize)]
pub struct DeletedOrder {
    /// Identifier of the removed order.
    pub deleted_order_no: OrderNo,
    /// Human-readable confirmation.
    pub message: String,
}

/// List orders, one page at a time, with their item summaries.
pub async fn list(pool: &PgPool, page: u32, size: u32) -> Result<Page<OrderWithItem>, AppError> {
    Ok(db::orders::page_with_item(pool, page, size).await?)
}

/// Get one order with its item summary.
pub async fn get(pool: &PgPool, order_no: &OrderNo) -> Result<OrderWithItem, AppError> {
    db::orders::get_with_item(pool, order_no)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order not found with id: {order_no}")))
}

/// Create an order: verify the price, withdraw the stock, allocate the next
/// order number, and persist item and order together.
pub async fn create(pool: &PgPool, input: OrderInput) -> Result<OrderWithItem, AppError> {
    let mut tx = pool.begin().await?;

    let mut item = db::items::get_for_update(&mut tx, input.item_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

    let total = pricing::order_total(item.price, input.quantity);
    if !pricing::price_matches(input.price, total) {
        return Err(AppError::InvalidPrice);
    }

    item.stock = ledger::apply_create(item.stock, input.quantity, MovementKind::Withdrawal)?;
    db::items::update_stock(&mut tx, item.id, item.stock).await?;

    let last = db::orders::last_for_update(&mut tx).await?;
    let order_no = OrderNo::next(last.as_ref().map(|o| &o.order_no));

    // Two creates can lock distinct "last" rows when one of them commits in
    // between, so the loser may derive a number that was just taken. The
    // primary key catches it; surface that as a retryable conflict rather
    // than an internal error.
    let order = match db::orders::insert(&mut tx, &order_no, item.id, input.quantity, total).await
    {
        Ok(order) => order,
        Err(db::RepositoryError::Database(err))
            if err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation()) =>
        {
            return Err(AppError::Conflict(format!(
                "Order number {order_no} was allocated concurrently, please retry"
            )));
        }
        Err(other) => return Err(other.into()),
    };
    tx.commit().await?;

    tracing::info!(
        order_no = %order.order_no,
        item = %item.name,
        quantity = order.quantity,
        stock = item.stock,
        "order created"
    );

    Ok(OrderWithItem {
        order_no: order.order_no,
        item: ItemSummary::from(&item),
        quantity: order.quantity,
        price: order.price,
    })
}

/// Update an order, reconciling the stock difference - possibly against a
/// different item than the one originally ordered.
pub async fn update(
    pool: &PgPool,
    order_no: &OrderNo,
    input: OrderInput,
) -> Result<OrderWithItem, AppError> {
    let mut tx = pool.begin().await?;

    let existing = db::orders::get_for_update(&mut tx, order_no)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order with ID {order_no} not found")))?;

    let mut new_item = db::items::get_for_update(&mut tx, input.item_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

    if existing.item_id == new_item.id {
        let diff = input.quantity - existing.quantity;
        if diff > 0 {
            new_item.stock =
                ledger::apply_create(new_item.stock, diff, MovementKind::Withdrawal)?;
        } else if diff < 0 {
            new_item.stock = ledger::apply_create(new_item.stock, -diff, MovementKind::Transfer)?;
        }
        db::items::update_stock(&mut tx, new_item.id, new_item.stock).await?;
    } else {
        // The claim moves: give the units back to the old item first, then
        // withdraw from the new one.
        let mut old_item = db::items::get_for_update(&mut tx, existing.item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;
        old_item.stock =
            ledger::apply_create(old_item.stock, existing.quantity, MovementKind::Transfer)?;
        db::items::update_stock(&mut tx, old_item.id, old_item.stock).await?;

        new_item.stock =
            ledger::apply_create(new_item.stock, input.quantity, MovementKind::Withdrawal)?;
        db::items::update_stock(&mut tx, new_item.id, new_item.stock).await?;
    }

    let total = pricing::order_total(new_item.price, input.quantity);
    if !pricing::price_matches(input.price, total) {
        // Nothing committed yet; the stock moves above roll back with the
        // transaction.
        return Err(AppError::InvalidPrice);
    }

    let order = db::orders::update(&mut tx, order_no, new_item.id, input.quantity, total).await?;
    tx.commit().await?;

    tracing::info!(
        order_no = %order.order_no,
        item = %new_item.name,
        quantity = order.quantity,
        stock = new_item.stock,
        "order updated"
    );

    Ok(OrderWithItem {
        order_no: order.order_no,
        item: ItemSummary::from(&new_item),
        quantity: order.quantity,
        price: order.price,
    })
}

/// Delete an order and give its claimed stock back.
pub async fn delete(pool: &PgPool, order_no: &OrderNo) -> Result<DeletedOrder, AppError> {
    let mut tx = pool.begin().await?;

    let order = db::orders::get_for_update(&mut tx, order_no)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order with ID {order_no} not found")))?;

    let mut item = db::items::get_for_update(&mut tx, order.item_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

    item.stock = ledger::apply_create(item.stock, order.quantity, MovementKind::Transfer)?;
    db::items::update_stock(&mut tx, item.id, item.stock).await?;
    db::orders::delete(&mut tx, order_no).await?;
    tx.commit().await?;

    tracing::info!(
        order_no = %order_no,
        item = %item.name,
        quantity = order.quantity,
        stock = item.stock,
        "order deleted, stock restored"
    );

    Ok(DeletedOrder {
        deleted_order_no: order.order_no,
        message: "Order successfully deleted and stock has been restored.".to_string(),
    })
}
