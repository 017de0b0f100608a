//! Stock delta computation for inventory movements and orders.
//!
//! Every mutation of an item's stock in the system goes through this module.
//! Movements and orders never do their own arithmetic on the stock field;
//! centralizing it here is what keeps the `stock >= 0` invariant provable.
//!
//! The functions are pure over integers: on failure the caller's item is
//! untouched, on success the caller persists the returned value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of an inventory movement.
///
/// Serialized as the single-letter codes `"T"` and `"W"`, which is also how
/// the kind is stored in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    /// Transfer into the warehouse; increases stock.
    #[serde(rename = "T")]
    Transfer,
    /// Withdrawal out of the warehouse; decreases stock.
    #[serde(rename = "W")]
    Withdrawal,
}

impl MovementKind {
    /// Single-letter storage code for this kind.
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::Transfer => "T",
            Self::Withdrawal => "W",
        }
    }

    /// Parse a storage code back into a kind.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "T" => Some(Self::Transfer),
            "W" => Some(Self::Withdrawal),
            _ => None,
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Failures of a stock computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A withdrawal asked for more units than the item has on hand.
    #[error("insufficient stock for withdrawal")]
    NotEnoughStock,

    /// The reconciled stock value is not representable.
    ///
    /// Distinct from [`LedgerError::NotEnoughStock`]: this covers the final
    /// negativity check after reversing an old effect and applying a new one
    /// (reversing a past transfer can drive stock negative on its own if the
    /// stock was edited out-of-band since the movement was recorded), and any
    /// step that would overflow the stock counter. Either way it is a
    /// consistency signal worth logging.
    #[error("stock cannot be negative")]
    InvalidStock,
}

/// Compute the stock that results from recording a new movement.
///
/// Transfers add `quantity`; withdrawals subtract it and fail with
/// [`LedgerError::NotEnoughStock`] when `stock < quantity`. A transfer that
/// would overflow the stock counter fails with
/// [`LedgerError::InvalidStock`] instead of wrapping.
pub fn apply_create(stock: i32, quantity: i32, kind: MovementKind) -> Result<i32, LedgerError> {
    match kind {
        MovementKind::Transfer => stock
            .checked_add(quantity)
            .ok_or(LedgerError::InvalidStock),
        MovementKind::Withdrawal => {
            if stock < quantity {
                return Err(LedgerError::NotEnoughStock);
            }
            stock
                .checked_sub(quantity)
                .ok_or(LedgerError::InvalidStock)
        }
    }
}

/// Compute the stock that results from editing an existing movement.
///
/// The old effect is reversed first (a transfer is subtracted back out, a
/// withdrawal is added back in), then the new effect is applied against the
/// reversed value with the same rule as [`apply_create`]. A final check
/// rejects any negative result with [`LedgerError::InvalidStock`], which
/// also covers a reversal or re-application that would overflow.
pub fn apply_update(
    stock: i32,
    old_quantity: i32,
    old_kind: MovementKind,
    new_quantity: i32,
    new_kind: MovementKind,
) -> Result<i32, LedgerError> {
    let reversed = match old_kind {
        MovementKind::Transfer => stock.checked_sub(old_quantity),
        MovementKind::Withdrawal => stock.checked_add(old_quantity),
    }
    .ok_or(LedgerError::InvalidStock)?;

    let applied = match new_kind {
        MovementKind::Transfer => reversed
            .checked_add(new_quantity)
            .ok_or(LedgerError::InvalidStock)?,
        MovementKind::Withdrawal => {
            if reversed < new_quantity {
                return Err(LedgerError::NotEnoughStock);
            }
            reversed
                .checked_sub(new_quantity)
                .ok_or(LedgerError::InvalidStock)?
        }
    };

    if applied < 0 {
        return Err(LedgerError::InvalidStock);
    }
    Ok(applied)
}
