use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{OrderDepth, Trade};
use crate::instruments::Product;
use crate::values::{Quantity, Timestamp};

/// Everything the exchange tells us at the start of a tick
///
/// Positions are the caller's confirmed net holdings; they already reflect
/// `own_trades` and are never predicted from orders we submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingState {
    pub timestamp: Timestamp,
    #[serde(default)]
    pub order_depths: HashMap<Product, OrderDepth>,
    #[serde(default)]
    pub position: HashMap<Product, Quantity>,
    #[serde(default)]
    pub own_trades: HashMap<Product, Vec<Trade>>,
    #[serde(default)]
    pub market_trades: HashMap<Product, Vec<Trade>>,
}

impl TradingState {
    /// Empty snapshot at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            ..Default::default()
        }
    }

    pub fn with_depth(mut self, product: Product, depth: OrderDepth) -> Self {
        self.order_depths.insert(product, depth);
        self
    }

    pub fn with_position(mut self, product: Product, quantity: Quantity) -> Self {
        self.position.insert(product, quantity);
        self
    }

    pub fn with_market_trades(mut self, product: Product, trades: Vec<Trade>) -> Self {
        self.market_trades.entry(product).or_default().extend(trades);
        self
    }

    pub fn with_own_trades(mut self, product: Product, trades: Vec<Trade>) -> Self {
        self.own_trades.entry(product).or_default().extend(trades);
        self
    }

    /// Book for a product, if the exchange sent one
    pub fn order_depth(&self, product: Product) -> Option<&OrderDepth> {
        self.order_depths.get(&product)
    }

    /// Net position (flat if the product is not listed)
    pub fn position(&self, product: Product) -> Quantity {
        self.position.get(&product).copied().unwrap_or(0)
    }

    /// Market trades printed since the previous tick
    pub fn market_trades(&self, product: Product) -> &[Trade] {
        self.market_trades
            .get(&product)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Our own fills since the previous tick
    pub fn own_trades(&self, product: Product) -> &[Trade] {
        self.own_trades
            .get(&product)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
