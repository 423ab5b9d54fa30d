//! Fair Value Estimator
//!
//! Keeps a bounded history of market trades per product and prices the
//! product at the volume-weighted average of that window. Too few samples,
//! or volume that nets to zero, yields no estimate.

use log::debug;
use prosperity_core::{Price, Product, Quantity, Trade};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Window configuration for the estimator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairValueConfig {
    /// Minimum retained trades before an estimate is produced
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,
    /// Maximum retained trades per product (oldest dropped first)
    #[serde(default = "default_max_samples")]
    pub max_samples: usize,
}

impl Default for FairValueConfig {
    fn default() -> Self {
        Self {
            min_samples: default_min_samples(),
            max_samples: default_max_samples(),
        }
    }
}

fn default_min_samples() -> usize {
    10
}

fn default_max_samples() -> usize {
    1000
}

/// VWAP fair value estimator over per-product trade windows
#[derive(Debug, Clone, Default)]
pub struct FairValueEstimator {
    config: FairValueConfig,
    histories: HashMap<Product, VecDeque<Trade>>,
}

impl FairValueEstimator {
    pub fn new(config: FairValueConfig) -> Self {
        Self {
            config,
            histories: HashMap::new(),
        }
    }

    pub fn config(&self) -> &FairValueConfig {
        &self.config
    }

    /// Append trades in arrival order, evicting the oldest beyond the window
    pub fn record(&mut self, product: Product, trades: &[Trade]) {
        if trades.is_empty() {
            return;
        }
        let max = self.config.max_samples;
        let history = self.histories.entry(product).or_default();
        history.extend(trades.iter().cloned());
        let excess = history.len().saturating_sub(max);
        if excess > 0 {
            history.drain(..excess);
        }
    }

    /// Number of trades retained for a product
    pub fn sample_count(&self, product: Product) -> usize {
        self.histories.get(&product).map_or(0, VecDeque::len)
    }

    /// Retained trades, oldest first
    pub fn history(&self, product: Product) -> impl Iterator<Item = &Trade> {
        self.histories.get(&product).into_iter().flatten()
    }

    /// Volume-weighted average price over the retained window
    ///
    /// `None` below `min_samples` or when total quantity is zero.
    pub fn estimate(&self, product: Product) -> Option<Price> {
        let count = self.sample_count(product);
        if count < self.config.min_samples || count == 0 {
            debug!(
                "[{}] Fair value unavailable: {} of {} samples",
                product, count, self.config.min_samples
            );
            return None;
        }

        let (notional, quantity) = self.history(product).fold(
            (Decimal::ZERO, 0 as Quantity),
            |(notional, quantity), trade| (notional + trade.notional(), quantity + trade.quantity),
        );

        if quantity == 0 {
            debug!("[{}] Fair value unavailable: volume nets to zero", product);
            return None;
        }

        Some(notional / Decimal::from(quantity))
    }
}
