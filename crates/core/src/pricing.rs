//! Server-side order total computation.
//!
//! Order prices are never taken from the caller: the server recomputes the
//! total from the item's unit price and rejects any submission that does not
//! match. The comparison is numeric, so `150.00` and `150` agree.

use rust_decimal::Decimal;

/// Total price for `quantity` units at `unit_price` each.
#[must_use]
pub fn order_total(unit_price: Decimal, quantity: i32) -> Decimal {
    unit_price * Decimal::from(quantity)
}

/// Whether a caller-supplied price matches the server-computed total.
#[must_use]
pub fn price_matches(supplied: Decimal, expected: Decimal) -> bool {
    supplied == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn total_is_unit_price_times_quantity() {
        let unit = Decimal::new(10_000, 0);
        assert_eq!(order_total(unit, 3), Decimal::new(30_000, 0));
    }

    #[test]
    fn total_keeps_decimal_precision() {
        let unit = Decimal::new(1999, 2); // 19.99
        assert_eq!(order_total(unit, 3), Decimal::new(5997, 2)); // 59.97
    }

    #[test]
    fn comparison_ignores_trailing_zeros() {
        let expected = Decimal::new(1500, 1); // 150.0
        let supplied = Decimal::new(150, 0); // 150
        assert!(price_matches(supplied, expected));
    }

    #[test]
    fn mismatched_price_is_rejected() {
        let expected = order_total(Decimal::new(10_000, 0), 2);
        assert!(!price_matches(Decimal::new(19_999, 0), expected));
    }
}
