//! Basket Arbitrage Engine
//!
//! Prices a composite product against its components at their own best
//! quotes. When the basket can be sold above what the components cost
//! (or bought below what they fetch), every leg is taken in the same tick.
//! Legs are sized independently: each takes its full best level,
//! limit-clamped.

use crate::strategy::{Strategy, StrategyContext};
use log::{debug, info};
use prosperity_core::{Order, Price, Product, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for a basket and its fixed composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketConfig {
    pub basket: Product,
    /// Component -> units per basket
    pub components: BTreeMap<Product, Quantity>,
}

impl Default for BasketConfig {
    fn default() -> Self {
        Self {
            basket: Product::PicnicBasket,
            components: BTreeMap::from([
                (Product::Baguette, 2),
                (Product::Dip, 4),
                (Product::Ukulele, 1),
            ]),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BasketArbitrage {
    config: BasketConfig,
}

impl BasketArbitrage {
    pub fn new(config: BasketConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BasketConfig {
        &self.config
    }

    /// Cost of buying one basket's worth of components at the best asks
    ///
    /// `None` if any component has no ask (treated as unbounded-high).
    pub fn synthetic_ask(&self, ctx: &StrategyContext<'_>) -> Option<Price> {
        self.config
            .components
            .iter()
            .map(|(product, weight)| {
                ctx.book(*product)
                    .best_ask()
                    .map(|(price, _)| price * Decimal::from(*weight))
            })
            .sum()
    }

    /// Proceeds of selling one basket's worth of components at the best bids
    ///
    /// `None` if any component has no bid (treated as unbounded-low).
    pub fn synthetic_bid(&self, ctx: &StrategyContext<'_>) -> Option<Price> {
        self.config
            .components
            .iter()
            .map(|(product, weight)| {
                ctx.book(*product)
                    .best_bid()
                    .map(|(price, _)| price * Decimal::from(*weight))
            })
            .sum()
    }

    /// Components cheap: buy every component, sell the basket
    fn sell_basket(&self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        self.config
            .components
            .keys()
            .filter_map(|product| ctx.lift_best_ask(*product))
            .chain(ctx.hit_best_bid(self.config.basket))
            .collect()
    }

    /// Components rich: sell every component, buy the basket
    fn buy_basket(&self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        self.config
            .components
            .keys()
            .filter_map(|product| ctx.hit_best_bid(*product))
            .chain(ctx.lift_best_ask(self.config.basket))
            .collect()
    }
}

impl Strategy for BasketArbitrage {
    fn name(&self) -> &str {
        "BasketArbitrage"
    }

    fn products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.config.components.keys().copied().collect();
        products.push(self.config.basket);
        products
    }

    fn on_tick(&mut self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        let basket = ctx.book(self.config.basket);
        let synthetic_ask = self.synthetic_ask(ctx);
        let synthetic_bid = self.synthetic_bid(ctx);

        let orders = if let (Some(cost), Some((bid, _))) = (synthetic_ask, basket.best_bid())
            && cost < bid
        {
            info!(
                "[{}] Basket rich: synthetic_ask={} < basket_bid={}",
                self.config.basket, cost, bid
            );
            self.sell_basket(ctx)
        } else if let (Some(proceeds), Some((ask, _))) = (synthetic_bid, basket.best_ask())
            && proceeds > ask
        {
            info!(
                "[{}] Basket cheap: synthetic_bid={} > basket_ask={}",
                self.config.basket, proceeds, ask
            );
            self.buy_basket(ctx)
        } else {
            debug!(
                "[{}] No mispricing: synthetic={:?}/{:?} basket={:?}/{:?}",
                self.config.basket,
                synthetic_bid,
                synthetic_ask,
                basket.best_bid().map(|(p, _)| p),
                basket.best_ask().map(|(p, _)| p)
            );
            Vec::new()
        };

        for order in &orders {
            info!("[{}] {}", self.name(), order);
        }
        orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fair_value::FairValueEstimator;
    use prosperity_core::{OrderDepth, TradingState};
    use prosperity_risk::{LimitTracker, PositionLimits};
    use rust_decimal_macros::dec;

    fn limits() -> PositionLimits {
        PositionLimits::new()
            .with_limit(Product::Baguette, 150)
            .with_limit(Product::Dip, 300)
            .with_limit(Product::Ukulele, 70)
            .with_limit(Product::PicnicBasket, 70)
    }

    fn run(state: &TradingState) -> (Vec<Order>, Option<Price>, Option<Price>) {
        let limits = limits();
        let fv = FairValueEstimator::default();
        let ctx = StrategyContext::new(state, LimitTracker::new(&limits, &state.position), &fv);
        let mut engine = BasketArbitrage::new(BasketConfig::default());
        let ask = engine.synthetic_ask(&ctx);
        let bid = engine.synthetic_bid(&ctx);
        (engine.on_tick(&ctx), ask, bid)
    }

    fn components(state: TradingState) -> TradingState {
        state
            .with_depth(
                Product::Baguette,
                OrderDepth::new().with_bid(dec!(98), 10).with_ask(dec!(100), 10),
            )
            .with_depth(
                Product::Dip,
                OrderDepth::new().with_bid(dec!(49), 20).with_ask(dec!(50), 20),
            )
            .with_depth(
                Product::Ukulele,
                OrderDepth::new().with_bid(dec!(198), 5).with_ask(dec!(200), 5),
            )
    }

    #[test]
    fn test_synthetic_prices() {
        let state = components(TradingState::new(0));
        let (_, ask, bid) = run(&state);

        // 100*2 + 50*4 + 200*1
        assert_eq!(ask, Some(dec!(600)));
        // 98*2 + 49*4 + 198*1
        assert_eq!(bid, Some(dec!(590)));
    }

    #[test]
    fn test_rich_basket_sells_basket_buys_components() {
        let state = components(TradingState::new(0)).with_depth(
            Product::PicnicBasket,
            OrderDepth::new().with_bid(dec!(650), 3).with_ask(dec!(660), 3),
        );
        let (orders, _, _) = run(&state);

        assert_eq!(
            orders,
            vec![
                Order::new(Product::Baguette, dec!(100), 10),
                Order::new(Product::Dip, dec!(50), 20),
                Order::new(Product::Ukulele, dec!(200), 5),
                Order::new(Product::PicnicBasket, dec!(650), -3),
            ]
        );
    }

    #[test]
    fn test_cheap_basket_buys_basket_sells_components() {
        let state = components(TradingState::new(0)).with_depth(
            Product::PicnicBasket,
            OrderDepth::new().with_bid(dec!(570), 3).with_ask(dec!(580), 4),
        );
        let (orders, _, _) = run(&state);

        assert_eq!(
            orders,
            vec![
                Order::new(Product::Baguette, dec!(98), -10),
                Order::new(Product::Dip, dec!(49), -20),
                Order::new(Product::Ukulele, dec!(198), -5),
                Order::new(Product::PicnicBasket, dec!(580), 4),
            ]
        );
    }

    #[test]
    fn test_fair_basket_does_nothing() {
        let state = components(TradingState::new(0)).with_depth(
            Product::PicnicBasket,
            OrderDepth::new().with_bid(dec!(595), 3).with_ask(dec!(605), 4),
        );
        assert!(run(&state).0.is_empty());
    }

    #[test]
    fn test_missing_component_ask_is_unbounded() {
        let state = components(TradingState::new(0))
            .with_depth(
                Product::Dip,
                OrderDepth::new().with_bid(dec!(49), 20),
            )
            .with_depth(
                Product::PicnicBasket,
                OrderDepth::new().with_bid(dec!(10000), 3).with_ask(dec!(10010), 3),
            );
        let (orders, ask, bid) = run(&state);

        assert_eq!(ask, None);
        assert_eq!(bid, Some(dec!(590)));
        assert!(orders.is_empty());
    }

    #[test]
    fn test_missing_component_bid_is_unbounded() {
        let state = components(TradingState::new(0))
            .with_depth(
                Product::Ukulele,
                OrderDepth::new().with_ask(dec!(200), 5),
            )
            .with_depth(
                Product::PicnicBasket,
                OrderDepth::new().with_bid(dec!(1), 3).with_ask(dec!(2), 3),
            );
        let (orders, _, bid) = run(&state);

        assert_eq!(bid, None);
        assert!(orders.is_empty());
    }

    #[test]
    fn test_legs_clamped_independently() {
        let state = components(TradingState::new(0))
            .with_depth(
                Product::PicnicBasket,
                OrderDepth::new().with_bid(dec!(650), 3).with_ask(dec!(660), 3),
            )
            .with_position(Product::Ukulele, 70)
            .with_position(Product::PicnicBasket, -69);
        let (orders, _, _) = run(&state);

        assert_eq!(
            orders,
            vec![
                Order::new(Product::Baguette, dec!(100), 10),
                Order::new(Product::Dip, dec!(50), 20),
                Order::new(Product::PicnicBasket, dec!(650), -1),
            ]
        );
    }
}
