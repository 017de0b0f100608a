//! Sequential, human-readable order identifiers.
//!
//! Order numbers look like `O001`, `O002`, ... The numeric suffix grows
//! without bound; past 999 the identifier simply widens (`O1000`), it is
//! never truncated.

use serde::{Deserialize, Serialize};

/// A sequential order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNo(String);

impl OrderNo {
    const PREFIX: char = 'O';

    /// Build an order number from its numeric suffix.
    #[must_use]
    pub fn from_sequence(sequence: u32) -> Self {
        Self(format!("{}{:03}", Self::PREFIX, sequence))
    }

    /// Wrap an identifier exactly as stored; no format check is applied,
    /// since historical rows may carry malformed values (see [`OrderNo::next`]).
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The identifier as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix of this identifier, if it parses.
    #[must_use]
    pub fn sequence(&self) -> Option<u32> {
        self.0.get(1..)?.parse().ok()
    }

    /// Derive the next identifier from the most recently created order.
    ///
    /// The suffix of `last` is parsed and incremented. A malformed suffix
    /// falls back to sequence 1 instead of failing the whole create; this
    /// mirrors the historical behavior and is deliberately permissive (a
    /// fallback while later orders exist would reuse an identifier, so the
    /// caller is expected to keep order creation serialized).
    #[must_use]
    pub fn next(last: Option<&Self>) -> Self {
        let sequence = last
            .and_then(Self::sequence)
            .map_or(1, |n| n.saturating_add(1));
        Self::from_sequence(sequence)
    }
}

impl std::fmt::Display for OrderNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OrderNo> for String {
    fn from(no: OrderNo) -> Self {
        no.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_order_is_o001() {
        assert_eq!(OrderNo::next(None).as_str(), "O001");
    }

    #[test]
    fn next_increments_the_suffix() {
        let last = OrderNo::from_raw("O001");
        assert_eq!(OrderNo::next(Some(&last)).as_str(), "O002");
    }

    #[test]
    fn suffix_is_zero_padded_to_three_digits() {
        assert_eq!(OrderNo::from_sequence(7).as_str(), "O007");
        assert_eq!(OrderNo::from_sequence(42).as_str(), "O042");
        assert_eq!(OrderNo::from_sequence(999).as_str(), "O999");
    }

    #[test]
    fn suffix_widens_past_three_digits() {
        let last = OrderNo::from_raw("O999");
        assert_eq!(OrderNo::next(Some(&last)).as_str(), "O1000");
        let last = OrderNo::from_raw("O1000");
        assert_eq!(OrderNo::next(Some(&last)).as_str(), "O1001");
    }

    #[test]
    fn malformed_last_identifier_falls_back_to_one() {
        let last = OrderNo::from_raw("OABC");
        assert_eq!(OrderNo::next(Some(&last)).as_str(), "O001");
        let last = OrderNo::from_raw("");
        assert_eq!(OrderNo::next(Some(&last)).as_str(), "O001");
    }

    #[test]
    fn sequence_parses_the_suffix() {
        assert_eq!(OrderNo::from_raw("O042").sequence(), Some(42));
        assert_eq!(OrderNo::from_raw("O1000").sequence(), Some(1000));
        assert_eq!(OrderNo::from_raw("Oxyz").sequence(), None);
    }

    #[test]
    fn serde_is_transparent() {
        let no = OrderNo::from_sequence(3);
        let json = serde_json::to_string(&no).expect("serialize");
        assert_eq!(json, "\"O003\"");
        let back: OrderNo = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, no);
    }
}
