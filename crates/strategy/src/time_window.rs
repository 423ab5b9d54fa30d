//! Time-Windowed Directional Strategy
//!
//! For goods whose value follows a known path over the round: accumulate
//! early, distribute late. Buys before `buy_cutoff`, sells from
//! `sell_starts` on, and stays out of the market in between.

use crate::strategy::{Strategy, StrategyContext};
use log::info;
use prosperity_core::{Order, Product, Timestamp};
use serde::{Deserialize, Serialize};

/// Configuration for the time-windowed strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindowConfig {
    pub product: Product,
    /// Lift the best ask while `timestamp < buy_cutoff`
    pub buy_cutoff: Timestamp,
    /// Hit the best bid while `timestamp >= sell_starts`
    pub sell_starts: Timestamp,
}

impl Default for TimeWindowConfig {
    fn default() -> Self {
        Self {
            product: Product::Berries,
            buy_cutoff: 350_000,
            sell_starts: 500_000,
        }
    }
}

/// Which part of the round a tick falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    Accumulate,
    Wait,
    Distribute,
}

#[derive(Debug, Clone)]
pub struct TimeWindowStrategy {
    config: TimeWindowConfig,
}

impl TimeWindowStrategy {
    pub fn new(config: TimeWindowConfig) -> Self {
        Self { config }
    }

    pub fn phase(&self, timestamp: Timestamp) -> WindowPhase {
        if timestamp < self.config.buy_cutoff {
            WindowPhase::Accumulate
        } else if timestamp >= self.config.sell_starts {
            WindowPhase::Distribute
        } else {
            WindowPhase::Wait
        }
    }
}

impl Strategy for TimeWindowStrategy {
    fn name(&self) -> &str {
        "TimeWindow"
    }

    fn products(&self) -> Vec<Product> {
        vec![self.config.product]
    }

    fn on_tick(&mut self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        let product = self.config.product;
        let order = match self.phase(ctx.timestamp()) {
            WindowPhase::Accumulate => ctx.lift_best_ask(product),
            WindowPhase::Distribute => ctx.hit_best_bid(product),
            WindowPhase::Wait => None,
        };

        if let Some(order) = &order {
            info!("[{}] t={} {}", self.name(), ctx.timestamp(), order);
        }
        order.into_iter().collect()
    }
}
