//! Order Book View
//!
//! Read-only accessor over one product's resting liquidity for the current
//! tick. The exchange sends a full snapshot every tick, so there is nothing
//! to replicate: the view borrows the snapshot directly.

use prosperity_core::{OrderDepth, Price, Quantity};
use rust_decimal::Decimal;

/// View over a single product's book
///
/// A product missing from the snapshot behaves as an empty book.
/// Ask volumes keep the venue's negative sign.
#[derive(Debug, Clone, Copy)]
pub struct BookView<'a> {
    depth: Option<&'a OrderDepth>,
}

impl<'a> BookView<'a> {
    pub fn new(depth: Option<&'a OrderDepth>) -> Self {
        Self { depth }
    }

    /// Highest bid price and its (positive) volume
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.depth?
            .buy_orders
            .iter()
            .next_back()
            .map(|(p, q)| (*p, *q))
    }

    /// Lowest ask price and its (negative) volume
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.depth?.sell_orders.iter().next().map(|(p, q)| (*p, *q))
    }

    /// Mid price (average of best bid and ask), `None` unless both sides quote
    pub fn mid_price(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some((bid + ask) / Decimal::TWO),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_depth() -> OrderDepth {
        OrderDepth::new()
            .with_bid(dec!(4998), 3)
            .with_bid(dec!(4997), 10)
            .with_bid(dec!(4995), 20)
            .with_ask(dec!(5002), 6)
            .with_ask(dec!(5003), 12)
    }

    #[test]
    fn test_best_levels() {
        let depth = sample_depth();
        let book = BookView::new(Some(&depth));

        assert_eq!(book.best_bid(), Some((dec!(4998), 3)));
        assert_eq!(book.best_ask(), Some((dec!(5002), -6)));
    }

    #[test]
    fn test_mid_price() {
        let depth = sample_depth();
        let book = BookView::new(Some(&depth));

        assert_eq!(book.mid_price(), Some(dec!(5000)));
    }

    #[test]
    fn test_one_sided_book_has_no_mid() {
        let depth = OrderDepth::new().with_bid(dec!(10), 1);
        let book = BookView::new(Some(&depth));

        assert!(book.best_ask().is_none());
        assert!(book.mid_price().is_none());
    }

    #[test]
    fn test_missing_book_is_empty() {
        let book = BookView::new(None);

        assert!(book.best_bid().is_none());
        assert!(book.best_ask().is_none());
        assert!(book.mid_price().is_none());
    }
}
