//! Integration tests for the order flow: sequential numbering, server-side
//! pricing, and the stock effects of creating, editing and deleting orders.

use rust_decimal::Decimal;

use stockroom_core::{LedgerError, MovementKind, OrderNo, ledger, pricing};

// =============================================================================
// Order Numbering
// =============================================================================

#[test]
fn test_order_numbers_are_sequential() {
    let mut last: Option<OrderNo> = None;
    let mut seen = Vec::new();
    for _ in 0..5 {
        let next = OrderNo::next(last.as_ref());
        seen.push(next.as_str().to_string());
        last = Some(next);
    }
    assert_eq!(seen, ["O001", "O002", "O003", "O004", "O005"]);
}

#[test]
fn test_order_numbers_widen_past_999() {
    let last = OrderNo::from_raw("O999");
    let next = OrderNo::next(Some(&last));
    assert_eq!(next.as_str(), "O1000");
    assert_eq!(OrderNo::next(Some(&next)).as_str(), "O1001");
}

#[test]
fn test_malformed_last_number_restarts_sequence() {
    // A hand-edited row with a garbage suffix must not block order creation.
    let last = OrderNo::from_raw("O-broken");
    assert_eq!(OrderNo::next(Some(&last)).as_str(), "O001");
}

#[test]
fn test_numbers_are_monotonic_within_a_run() {
    let mut last = OrderNo::next(None);
    for _ in 0..1200 {
        let next = OrderNo::next(Some(&last));
        assert!(
            next.sequence() > last.sequence(),
            "{next} should come after {last}"
        );
        last = next;
    }
    assert_eq!(last.as_str(), "O1201");
}

// =============================================================================
// Price Verification
// =============================================================================

#[test]
fn test_submitted_total_must_match_computed() {
    let unit = Decimal::new(15_000, 2); // 150.00
    let expected = pricing::order_total(unit, 2);

    assert!(pricing::price_matches(Decimal::new(300, 0), expected));
    assert!(pricing::price_matches(Decimal::new(30_000, 2), expected));
    assert!(!pricing::price_matches(Decimal::new(29_999, 2), expected));
}

#[test]
fn test_total_scales_with_quantity() {
    let unit = Decimal::new(999, 2); // 9.99
    assert_eq!(pricing::order_total(unit, 1), Decimal::new(999, 2));
    assert_eq!(pricing::order_total(unit, 100), Decimal::new(99_900, 2));
}

// =============================================================================
// Stock Effects
// =============================================================================

#[test]
fn test_order_creation_withdraws_stock() {
    let stock = ledger::apply_create(10, 4, MovementKind::Withdrawal).expect("order create");
    assert_eq!(stock, 6);
}

#[test]
fn test_order_creation_fails_on_insufficient_stock() {
    assert_eq!(
        ledger::apply_create(3, 4, MovementKind::Withdrawal),
        Err(LedgerError::NotEnoughStock)
    );
}

#[test]
fn test_order_quantity_increase_withdraws_the_difference() {
    // An order for 2 exists; the item holds 5. Raising the order to 6 needs
    // 4 more units, one too many.
    let stock = 5;
    let diff = 6 - 2;
    assert_eq!(
        ledger::apply_create(stock, diff, MovementKind::Withdrawal),
        Err(LedgerError::NotEnoughStock)
    );

    // Raising to 7 after a restock of 2 works.
    let stock = ledger::apply_create(stock, 2, MovementKind::Transfer).expect("restock");
    let stock = ledger::apply_create(stock, 7 - 2, MovementKind::Withdrawal).expect("edit");
    assert_eq!(stock, 2);
}

#[test]
fn test_order_quantity_decrease_restores_the_difference() {
    // An order for 6 exists; lowering it to 2 returns 4 units.
    let stock = ledger::apply_create(1, 6 - 2, MovementKind::Transfer).expect("restore");
    assert_eq!(stock, 5);
}

#[test]
fn test_order_item_swap_restores_then_withdraws() {
    // The order moves from item A (qty 3) to item B (qty 2).
    let stock_a = ledger::apply_create(0, 3, MovementKind::Transfer).expect("restore A");
    assert_eq!(stock_a, 3);

    let stock_b = ledger::apply_create(2, 2, MovementKind::Withdrawal).expect("withdraw B");
    assert_eq!(stock_b, 0);
}

#[test]
fn test_order_deletion_restores_stock() {
    let stock = ledger::apply_create(6, 4, MovementKind::Transfer).expect("order delete");
    assert_eq!(stock, 10);
}
