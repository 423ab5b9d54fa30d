//! Strategy Trait and Context
//!
//! Defines the interface every trading strategy implements and the
//! read-only view of the tick it receives.

use crate::fair_value::FairValueEstimator;
use crate::orderbook::BookView;
use prosperity_core::{Order, Price, Product, Quantity, Timestamp, TradingState};
use prosperity_risk::LimitTracker;
use std::fmt;

/// Context provided to a strategy on each tick
pub struct StrategyContext<'a> {
    /// Snapshot received from the exchange
    pub state: &'a TradingState,
    /// Position limits applied to the snapshot's positions
    pub limits: LimitTracker<'a>,
    /// Trade-history fair values (already updated with this tick's trades)
    pub fair_values: &'a FairValueEstimator,
}

impl<'a> StrategyContext<'a> {
    pub fn new(
        state: &'a TradingState,
        limits: LimitTracker<'a>,
        fair_values: &'a FairValueEstimator,
    ) -> Self {
        Self {
            state,
            limits,
            fair_values,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        self.state.timestamp
    }

    /// Get the book for a product (empty if the exchange sent none)
    pub fn book(&self, product: Product) -> BookView<'a> {
        BookView::new(self.state.order_depth(product))
    }

    /// Get position for a product (flat if none)
    pub fn position(&self, product: Product) -> Quantity {
        self.limits.position(product)
    }

    /// VWAP fair value, if enough trades have been seen
    pub fn fair_value(&self, product: Product) -> Option<Price> {
        self.fair_values.estimate(product)
    }

    /// Buy the entire best ask, limit-clamped
    ///
    /// `None` if there is no ask or no buy headroom left.
    pub fn lift_best_ask(&self, product: Product) -> Option<Order> {
        let (price, volume) = self.book(product).best_ask()?;
        let quantity = self.limits.clamp_buy(product, -volume);
        (quantity > 0).then(|| Order::buy(product, price, quantity))
    }

    /// Sell into the entire best bid, limit-clamped
    ///
    /// `None` if there is no bid or no sell headroom left.
    pub fn hit_best_bid(&self, product: Product) -> Option<Order> {
        let (price, volume) = self.book(product).best_bid()?;
        let quantity = self.limits.clamp_sell(product, -volume);
        (quantity < 0).then(|| Order::new(product, price, quantity))
    }
}

/// Strategy trait - implement this for each trading algorithm
///
/// Strategies run synchronously, once per tick, in configuration order.
/// Any state they keep lives in the strategy value itself.
pub trait Strategy: Send + fmt::Debug {
    /// Strategy name for logging
    fn name(&self) -> &str;

    /// Products this strategy places orders in
    fn products(&self) -> Vec<Product>;

    /// Decide this tick's orders
    fn on_tick(&mut self, ctx: &StrategyContext<'_>) -> Vec<Order>;
}
