//! Tick Orchestrator
//!
//! Owns every piece of state that survives between ticks (trade histories,
//! pairs regression series) and runs the configured strategies once per
//! snapshot. Product ownership is fixed at construction.

use crate::config::{TraderConfig, load_default_config};
use crate::error::Result;
use log::{debug, info, warn};
use prosperity_core::{Order, Product, TradingState};
use prosperity_risk::{LimitTracker, PositionLimits};
use prosperity_strategy::{FairValueEstimator, Strategy, StrategyContext};
use std::collections::BTreeMap;

/// Per-process trading engine
#[derive(Debug)]
pub struct Trader {
    limits: PositionLimits,
    estimator: FairValueEstimator,
    strategies: Vec<Box<dyn Strategy>>,
    /// Product -> index of the owning strategy
    roles: BTreeMap<Product, usize>,
}

impl Trader {
    /// Validate `config` and build its strategies
    pub fn new(config: TraderConfig) -> Result<Self> {
        config.validate()?;
        let roles = config.roles()?;

        if config.strategies.is_empty() {
            warn!("[Trader] No strategies configured, every tick will be empty");
        }
        for (product, limit) in config.limits.iter() {
            if !roles.contains_key(&product) {
                debug!("[Trader] {} has limit {} but no strategy", product, limit);
            }
        }

        let strategies: Vec<Box<dyn Strategy>> =
            config.strategies.iter().map(|s| s.build()).collect();
        for (index, strategy) in strategies.iter().enumerate() {
            info!(
                "[Trader] Strategy #{} {} on {:?}",
                index,
                strategy.name(),
                strategy.products()
            );
        }

        Ok(Self {
            limits: config.limits,
            estimator: FairValueEstimator::new(config.fair_value),
            strategies,
            roles,
        })
    }

    /// Trader for the embedded round configuration
    pub fn from_default() -> Result<Self> {
        Self::new(load_default_config()?)
    }

    pub fn limits(&self) -> &PositionLimits {
        &self.limits
    }

    pub fn estimator(&self) -> &FairValueEstimator {
        &self.estimator
    }

    /// Products some strategy trades, with their owner's name
    pub fn roles(&self) -> impl Iterator<Item = (Product, &str)> + '_ {
        self.roles
            .iter()
            .map(|(product, index)| (*product, self.strategies[*index].name()))
    }

    /// Decide this tick's orders
    ///
    /// Every managed product gets an entry, empty when nothing is traded.
    /// Never fails: strategies that lack data simply emit nothing.
    pub fn run(&mut self, state: &TradingState) -> BTreeMap<Product, Vec<Order>> {
        for (product, trades) in &state.market_trades {
            self.estimator.record(*product, trades);
        }

        let mut result: BTreeMap<Product, Vec<Order>> =
            self.roles.keys().map(|product| (*product, Vec::new())).collect();

        let ctx = StrategyContext::new(
            state,
            LimitTracker::new(&self.limits, &state.position),
            &self.estimator,
        );

        for (index, strategy) in self.strategies.iter_mut().enumerate() {
            for order in strategy.on_tick(&ctx) {
                if self.roles.get(&order.product) != Some(&index) {
                    warn!(
                        "[Trader] Dropping {} from {}: product not owned",
                        order,
                        strategy.name()
                    );
                    continue;
                }
                if order.quantity == 0 {
                    continue;
                }
                result.entry(order.product).or_default().push(order);
            }
        }

        for (product, orders) in result.iter_mut() {
            enforce_limits(*product, orders, &ctx.limits);
        }

        debug!(
            "[Trader] t={} {} orders",
            state.timestamp,
            result.values().map(Vec::len).sum::<usize>()
        );
        result
    }
}

/// Drop any order that would take the product past its limit if every
/// buy (or every sell) of the tick filled
fn enforce_limits(product: Product, orders: &mut Vec<Order>, limits: &LimitTracker<'_>) {
    let mut bought = 0;
    let mut sold = 0;

    orders.retain(|order| {
        let committed = if order.quantity > 0 { bought } else { sold };
        if limits.would_breach_after(order, committed) {
            warn!(
                "[{}] Limit guard dropped {} (pos={}, limit={})",
                product,
                order,
                limits.position(product),
                limits.limit(product)
            );
            return false;
        }
        if order.quantity > 0 {
            bought += order.quantity;
        } else {
            sold += order.quantity;
        }
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosperity_core::OrderDepth;
    use prosperity_strategy::{MarketMaker, MarketMakerConfig};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    /// Emits a buy in a product it was never assigned
    #[derive(Debug)]
    struct Stray;

    impl Strategy for Stray {
        fn name(&self) -> &str {
            "Stray"
        }

        fn products(&self) -> Vec<Product> {
            vec![Product::Pearls]
        }

        fn on_tick(&mut self, _ctx: &StrategyContext<'_>) -> Vec<Order> {
            vec![
                Order::buy(Product::Pearls, dec!(9998), 1),
                Order::buy(Product::Bananas, dec!(5000), 1),
            ]
        }
    }

    #[test]
    fn test_guard_keeps_orders_within_limit() {
        let limits = PositionLimits::new().with_limit(Product::Bananas, 20);
        let positions = HashMap::from([(Product::Bananas, 15)]);
        let tracker = LimitTracker::new(&limits, &positions);
        let mut orders = vec![
            Order::buy(Product::Bananas, dec!(4999), 3),
            Order::buy(Product::Bananas, dec!(5000), 3),
            Order::buy(Product::Bananas, dec!(5001), 2),
            Order::sell(Product::Bananas, dec!(5003), 35),
        ];

        enforce_limits(Product::Bananas, &mut orders, &tracker);

        assert_eq!(
            orders,
            vec![
                Order::buy(Product::Bananas, dec!(4999), 3),
                Order::buy(Product::Bananas, dec!(5001), 2),
                Order::sell(Product::Bananas, dec!(5003), 35),
            ]
        );
    }

    #[test]
    fn test_guard_without_limit_drops_everything() {
        let limits = PositionLimits::new();
        let positions = HashMap::new();
        let tracker = LimitTracker::new(&limits, &positions);
        let mut orders = vec![Order::buy(Product::DivingGear, dec!(100), 1)];

        enforce_limits(Product::DivingGear, &mut orders, &tracker);
        assert!(orders.is_empty());
    }

    #[test]
    fn test_default_trader_manages_configured_products() {
        let trader = Trader::from_default().unwrap();
        let managed: Vec<Product> = trader.roles().map(|(p, _)| p).collect();

        assert_eq!(
            managed,
            vec![
                Product::Pearls,
                Product::Bananas,
                Product::Coconuts,
                Product::PinaColadas,
                Product::Berries,
                Product::Baguette,
                Product::Dip,
                Product::Ukulele,
                Product::PicnicBasket,
            ]
        );
        assert_eq!(trader.limits().limit(Product::DivingGear), 50);
    }

    #[test]
    fn test_orders_for_unowned_products_are_dropped() {
        let limits = PositionLimits::new()
            .with_limit(Product::Pearls, 20)
            .with_limit(Product::Bananas, 20);
        let mut trader = Trader {
            limits,
            estimator: FairValueEstimator::default(),
            strategies: vec![
                Box::new(Stray),
                Box::new(MarketMaker::new(MarketMakerConfig::default())),
            ],
            roles: BTreeMap::from([(Product::Pearls, 0), (Product::Bananas, 1)]),
        };

        let state = TradingState::new(0).with_depth(
            Product::Bananas,
            OrderDepth::new().with_bid(dec!(4998), 2).with_ask(dec!(5002), 2),
        );
        let orders = trader.run(&state);

        assert_eq!(
            orders[&Product::Pearls],
            vec![Order::buy(Product::Pearls, dec!(9998), 1)]
        );
        assert!(orders[&Product::Bananas].is_empty());
    }

    #[test]
    fn test_debug_lists_strategies() {
        let trader = Trader::from_default().unwrap();
        let debug = format!("{trader:?}");

        assert!(debug.contains("MarketMaker"));
        assert!(debug.contains("PairsEngine"));
        assert!(debug.contains("BasketArbitrage"));
        assert!(debug.contains("TimeWindowStrategy"));
    }
}
