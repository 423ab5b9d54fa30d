use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::values::{Price, Quantity};

/// Resting liquidity for one product at the start of a tick
///
/// Follows the venue's volume convention: bid volumes are positive,
/// ask volumes are negative (the quantity a seller is offering).
/// An empty map means no quotes on that side this tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDepth {
    /// Bid levels: price -> positive volume
    #[serde(default)]
    pub buy_orders: BTreeMap<Price, Quantity>,
    /// Ask levels: price -> negative volume
    #[serde(default)]
    pub sell_orders: BTreeMap<Price, Quantity>,
}

impl OrderDepth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bid level (volume stored positive)
    pub fn with_bid(mut self, price: Price, volume: Quantity) -> Self {
        self.buy_orders.insert(price, volume.abs());
        self
    }

    /// Add an ask level (volume stored negative)
    pub fn with_ask(mut self, price: Price, volume: Quantity) -> Self {
        self.sell_orders.insert(price, -volume.abs());
        self
    }
}
