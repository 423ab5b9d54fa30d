//! Relative-Value Taker
//!
//! Compares the VWAP fair values of two related products. The cheaper one
//! is bought at its best ask, the richer one sold at its best bid. Equal
//! fair values, or either one unavailable, means no trade.

use crate::strategy::{Strategy, StrategyContext};
use log::{debug, info};
use prosperity_core::{Order, Product};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeValueConfig {
    pub first: Product,
    pub second: Product,
}

impl Default for RelativeValueConfig {
    fn default() -> Self {
        Self {
            first: Product::Coconuts,
            second: Product::PinaColadas,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelativeValueTaker {
    config: RelativeValueConfig,
}

impl RelativeValueTaker {
    pub fn new(config: RelativeValueConfig) -> Self {
        Self { config }
    }

    /// One product judged against its partner
    fn evaluate(&self, ctx: &StrategyContext<'_>, product: Product, ordering: Ordering) -> Option<Order> {
        match ordering {
            Ordering::Less => ctx.lift_best_ask(product),
            Ordering::Greater => ctx.hit_best_bid(product),
            Ordering::Equal => None,
        }
    }
}

impl Strategy for RelativeValueTaker {
    fn name(&self) -> &str {
        "RelativeValue"
    }

    fn products(&self) -> Vec<Product> {
        vec![self.config.first, self.config.second]
    }

    fn on_tick(&mut self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        let RelativeValueConfig { first, second } = self.config;
        let (Some(first_value), Some(second_value)) = (ctx.fair_value(first), ctx.fair_value(second))
        else {
            debug!("[{}] Fair values not ready for {}/{}", self.name(), first, second);
            return Vec::new();
        };

        let ordering = first_value.cmp(&second_value);
        let orders: Vec<Order> = self
            .evaluate(ctx, first, ordering)
            .into_iter()
            .chain(self.evaluate(ctx, second, ordering.reverse()))
            .collect();

        for order in &orders {
            info!(
                "[{}] {} (fv {}={} {}={})",
                self.name(),
                order,
                first,
                first_value,
                second,
                second_value
            );
        }
        orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fair_value::{FairValueConfig, FairValueEstimator};
    use prosperity_core::{OrderDepth, Price, Trade, TradingState};
    use prosperity_risk::{LimitTracker, PositionLimits};
    use rust_decimal_macros::dec;

    fn estimator(coconuts: Option<Price>, pina: Option<Price>) -> FairValueEstimator {
        let mut fv = FairValueEstimator::new(FairValueConfig {
            min_samples: 1,
            max_samples: 10,
        });
        if let Some(price) = coconuts {
            fv.record(Product::Coconuts, &[Trade::new(price, 1, 0)]);
        }
        if let Some(price) = pina {
            fv.record(Product::PinaColadas, &[Trade::new(price, 1, 0)]);
        }
        fv
    }

    fn state() -> TradingState {
        TradingState::new(100)
            .with_depth(
                Product::Coconuts,
                OrderDepth::new().with_bid(dec!(7999), 12).with_ask(dec!(8001), 9),
            )
            .with_depth(
                Product::PinaColadas,
                OrderDepth::new().with_bid(dec!(14999), 6).with_ask(dec!(15001), 4),
            )
    }

    fn run(state: &TradingState, fv: &FairValueEstimator) -> Vec<Order> {
        let limits = PositionLimits::new()
            .with_limit(Product::Coconuts, 600)
            .with_limit(Product::PinaColadas, 300);
        let ctx = StrategyContext::new(state, LimitTracker::new(&limits, &state.position), fv);
        RelativeValueTaker::new(RelativeValueConfig::default()).on_tick(&ctx)
    }

    #[test]
    fn test_buys_cheaper_sells_richer() {
        let fv = estimator(Some(dec!(8000)), Some(dec!(15000)));
        let orders = run(&state(), &fv);

        assert_eq!(
            orders,
            vec![
                Order::new(Product::Coconuts, dec!(8001), 9),
                Order::new(Product::PinaColadas, dec!(14999), -6),
            ]
        );
    }

    #[test]
    fn test_equal_values_do_nothing() {
        let fv = estimator(Some(dec!(9000)), Some(dec!(9000)));
        assert!(run(&state(), &fv).is_empty());
    }

    #[test]
    fn test_missing_fair_value_does_nothing() {
        let fv = estimator(Some(dec!(8000)), None);
        assert!(run(&state(), &fv).is_empty());
    }

    #[test]
    fn test_limits_clamp_each_leg() {
        let fv = estimator(Some(dec!(8000)), Some(dec!(15000)));
        let state = state()
            .with_position(Product::Coconuts, 596)
            .with_position(Product::PinaColadas, -300);

        assert_eq!(
            run(&state, &fv),
            vec![Order::new(Product::Coconuts, dec!(8001), 4)]
        );
    }
}
