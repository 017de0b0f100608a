//! Order domain model - a durable, priced claim on stock.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{ItemId, OrderNo};

use super::item::Item;
use super::validate::ValidationErrors;

/// A customer order. Always withdraws stock; creation allocates the next
/// sequential order number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Sequential identifier (`O001`, `O002`, ...).
    pub order_no: OrderNo,
    /// Item the order claims stock from.
    pub item_id: ItemId,
    /// Units ordered.
    pub quantity: i32,
    /// Server-computed total price.
    pub price: Decimal,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was last edited.
    pub updated_at: DateTime<Utc>,
}

/// Item fields embedded in order responses.
#[derive(Debug, Clone, Serialize)]
pub struct ItemSummary {
    /// Item ID.
    pub item_id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price the total was computed from.
    pub price: Decimal,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price,
        }
    }
}

/// An order with its item summary, as returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItem {
    /// Sequential identifier.
    pub order_no: OrderNo,
    /// Snapshot of the ordered item.
    pub item: ItemSummary,
    /// Units ordered.
    pub quantity: i32,
    /// Total price.
    pub price: Decimal,
}

/// Input for creating or updating an order.
///
/// `price` is the caller's claimed total; it must match the server-computed
/// `unit price x quantity` exactly or the request is rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderInput {
    /// Item to order.
    pub item_id: ItemId,
    /// Units to order.
    pub quantity: i32,
    /// Claimed total price.
    pub price: Decimal,
}

impl OrderInput {
    /// Check the fields before any stock or price math runs.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.quantity <= 0 {
            errors.add("quantity", "must be positive");
        }
        if self.price < Decimal::ZERO {
            errors.add("price", "must not be negative");
        }
        errors.into_result()
    }
}
