//! Item domain model - the single source of truth for stock.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

use super::validate::ValidationErrors;

/// A stocked item.
///
/// `stock` is only ever mutated through the ledger (movements and orders)
/// or an explicit item update, and never goes negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique item ID.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units on hand.
    pub stock: i32,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemInput {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Initial units on hand.
    pub stock: i32,
}

impl CreateItemInput {
    /// Check the fields before any persistence happens.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.add("name", "must not be blank");
        }
        if self.price < Decimal::ZERO {
            errors.add("price", "must not be negative");
        }
        if self.stock < 0 {
            errors.add("stock", "must not be negative");
        }
        errors.into_result()
    }
}

/// Input for updating an item; all fields are set directly.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemInput {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units on hand.
    pub stock: i32,
}

impl UpdateItemInput {
    /// Check the fields before any persistence happens.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.add("name", "must not be blank");
        }
        if self.price < Decimal::ZERO {
            errors.add("price", "must not be negative");
        }
        if self.stock < 0 {
            errors.add("stock", "must not be negative");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let input = CreateItemInput {
            name: "   ".to_string(),
            price: Decimal::new(100, 0),
            stock: 5,
        };
        let err = input.validate().expect_err("blank name");
        assert!(err.into_map().contains_key("name"));
    }

    #[test]
    fn negative_price_and_stock_are_rejected() {
        let input = CreateItemInput {
            name: "Widget".to_string(),
            price: Decimal::new(-1, 0),
            stock: -3,
        };
        let err = input.validate().expect_err("negative fields");
        let map = err.into_map();
        assert!(map.contains_key("price"));
        assert!(map.contains_key("stock"));
    }

    #[test]
    fn valid_input_passes() {
        let input = UpdateItemInput {
            name: "Widget".to_string(),
            price: Decimal::ZERO,
            stock: 0,
        };
        assert!(input.validate().is_ok());
    }
}
