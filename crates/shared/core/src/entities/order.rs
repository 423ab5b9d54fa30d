use serde::{Deserialize, Serialize};

use super::Side;
use crate::instruments::Product;
use crate::values::{Price, Quantity};

/// Liquidity-taking limit order sent to the exchange
///
/// The sign of `quantity` carries the side: positive buys at `price` or
/// better, negative sells at `price` or better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub product: Product,
    pub price: Price,
    pub quantity: Quantity,
}

impl Order {
    pub fn new(product: Product, price: Price, quantity: Quantity) -> Self {
        Self {
            product,
            price,
            quantity,
        }
    }

    /// Buy `size` units (sign is normalised to positive)
    pub fn buy(product: Product, price: Price, size: Quantity) -> Self {
        Self::new(product, price, size.abs())
    }

    /// Sell `size` units (sign is normalised to negative)
    pub fn sell(product: Product, price: Price, size: Quantity) -> Self {
        Self::new(product, price, -size.abs())
    }

    /// Side of the order, `None` for a zero-size order
    pub fn side(&self) -> Option<Side> {
        Side::of(self.quantity)
    }

    /// Unsigned order size
    pub fn size(&self) -> Quantity {
        self.quantity.abs()
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.side() {
            Some(side) => write!(f, "{} {} {}x {}", self.product, side, self.size(), self.price),
            None => write!(f, "{} NOOP @ {}", self.product, self.price),
        }
    }
}
