//! Inventory movement domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{ItemId, MovementId, MovementKind};

use super::item::Item;
use super::validate::ValidationErrors;

/// A recorded stock movement - a transfer in or a withdrawal out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    /// Unique movement ID.
    pub id: MovementId,
    /// Item whose stock this movement changed.
    pub item_id: ItemId,
    /// Units moved; always positive, direction comes from `kind`.
    pub quantity: i32,
    /// Transfer or withdrawal.
    pub kind: MovementKind,
    /// When the movement was recorded.
    pub created_at: DateTime<Utc>,
    /// When the movement was last edited.
    pub updated_at: DateTime<Utc>,
}

/// A movement with the item snapshot as of the operation.
#[derive(Debug, Clone, Serialize)]
pub struct MovementWithItem {
    /// The movement itself.
    #[serde(flatten)]
    pub movement: Movement,
    /// Resolved item, including its post-operation stock.
    pub item: Item,
}

/// Input for creating or updating a movement.
#[derive(Debug, Clone, Deserialize)]
pub struct MovementInput {
    /// Item to move stock for.
    pub item_id: ItemId,
    /// Units to move.
    pub quantity: i32,
    /// Transfer or withdrawal.
    pub kind: MovementKind,
}

impl MovementInput {
    /// Check the fields before any stock math runs.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.quantity <= 0 {
            errors.add("quantity", "must be positive");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_quantity_is_rejected() {
        for quantity in [0, -4] {
            let input = MovementInput {
                item_id: ItemId::new(1),
                quantity,
                kind: MovementKind::Transfer,
            };
            let err = input.validate().expect_err("bad quantity");
            assert!(err.into_map().contains_key("quantity"));
        }
    }

    #[test]
    fn positive_quantity_passes() {
        let input = MovementInput {
            item_id: ItemId::new(1),
            quantity: 3,
            kind: MovementKind::Withdrawal,
        };
        assert!(input.validate().is_ok());
    }
}
