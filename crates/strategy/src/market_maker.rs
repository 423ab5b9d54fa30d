//! Single-Instrument Market Maker
//!
//! A liquidity-taking strategy that:
//! - Prices the product from trade history (VWAP) or a known constant
//! - Lifts the best ask when it is below fair value
//! - Hits the best bid when it is above fair value
//! - Respects position limits
//!
//! The discount/premium multipliers widen the band the book must cross
//! before we trade.

use crate::strategy::{Strategy, StrategyContext};
use log::{debug, info};
use prosperity_core::{Order, Price, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where the maker's fair value comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairValueSource {
    /// Volume-weighted average of recent market trades
    #[default]
    Vwap,
    /// Constant value known a priori
    Fixed(Price),
}

/// Configuration for the market maker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketMakerConfig {
    /// Product to trade
    pub product: Product,
    #[serde(default)]
    pub fair_value: FairValueSource,
    /// Buy only when best ask < fair value * buy_discount
    #[serde(default = "default_multiplier")]
    pub buy_discount: Decimal,
    /// Sell only when best bid > fair value * sell_premium
    #[serde(default = "default_multiplier")]
    pub sell_premium: Decimal,
}

impl Default for MarketMakerConfig {
    fn default() -> Self {
        Self {
            product: Product::Bananas,
            fair_value: FairValueSource::Vwap,
            buy_discount: default_multiplier(),
            sell_premium: default_multiplier(),
        }
    }
}

fn default_multiplier() -> Decimal {
    Decimal::ONE
}

/// Fair-value taker for a single product
#[derive(Debug, Clone)]
pub struct MarketMaker {
    config: MarketMakerConfig,
}

impl MarketMaker {
    pub fn new(config: MarketMakerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarketMakerConfig {
        &self.config
    }

    fn fair_value(&self, ctx: &StrategyContext<'_>) -> Option<Price> {
        match self.config.fair_value {
            FairValueSource::Fixed(price) => Some(price),
            FairValueSource::Vwap => ctx.fair_value(self.config.product),
        }
    }

    /// Orders against a given fair value
    fn generate_orders(&self, ctx: &StrategyContext<'_>, fair_value: Price) -> Vec<Order> {
        let product = self.config.product;
        let book = ctx.book(product);
        let mut orders = Vec::new();

        if let Some((ask, _)) = book.best_ask()
            && ask < fair_value * self.config.buy_discount
            && let Some(order) = ctx.lift_best_ask(product)
        {
            info!("[{}] BUY {}x {} (fair={})", product, order.size(), ask, fair_value);
            orders.push(order);
        }

        if let Some((bid, _)) = book.best_bid()
            && bid > fair_value * self.config.sell_premium
            && let Some(order) = ctx.hit_best_bid(product)
        {
            info!("[{}] SELL {}x {} (fair={})", product, order.size(), bid, fair_value);
            orders.push(order);
        }

        orders
    }
}

impl Strategy for MarketMaker {
    fn name(&self) -> &str {
        "MarketMaker"
    }

    fn products(&self) -> Vec<Product> {
        vec![self.config.product]
    }

    fn on_tick(&mut self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        match self.fair_value(ctx) {
            Some(fair_value) => self.generate_orders(ctx, fair_value),
            None => {
                debug!("[{}] No fair value, skipping", self.config.product);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fair_value::{FairValueConfig, FairValueEstimator};
    use prosperity_core::{OrderDepth, Trade, TradingState};
    use prosperity_risk::{LimitTracker, PositionLimits};
    use rust_decimal_macros::dec;

    fn run(maker: &mut MarketMaker, state: &TradingState, fv: &FairValueEstimator) -> Vec<Order> {
        let limits = PositionLimits::new()
            .with_limit(Product::Pearls, 20)
            .with_limit(Product::Bananas, 20);
        let ctx = StrategyContext::new(state, LimitTracker::new(&limits, &state.position), fv);
        maker.on_tick(&ctx)
    }

    fn fixed(product: Product, price: Decimal) -> MarketMaker {
        MarketMaker::new(MarketMakerConfig {
            product,
            fair_value: FairValueSource::Fixed(price),
            ..Default::default()
        })
    }

    #[test]
    fn test_lifts_ask_below_fair_value() {
        let mut mm = fixed(Product::Pearls, dec!(10000));
        let state = TradingState::new(0).with_depth(
            Product::Pearls,
            OrderDepth::new()
                .with_bid(dec!(9995), 2)
                .with_ask(dec!(9990), 5),
        );

        let orders = run(&mut mm, &state, &FairValueEstimator::default());
        assert_eq!(orders, vec![Order::new(Product::Pearls, dec!(9990), 5)]);
    }

    #[test]
    fn test_hits_bid_above_fair_value() {
        let mut mm = fixed(Product::Pearls, dec!(10000));
        let state = TradingState::new(0).with_depth(
            Product::Pearls,
            OrderDepth::new()
                .with_bid(dec!(10010), 5)
                .with_ask(dec!(10012), 5),
        );

        let orders = run(&mut mm, &state, &FairValueEstimator::default());
        assert_eq!(orders, vec![Order::new(Product::Pearls, dec!(10010), -5)]);
    }

    #[test]
    fn test_both_sides_can_fire() {
        let mut mm = fixed(Product::Pearls, dec!(10000));
        let state = TradingState::new(0).with_depth(
            Product::Pearls,
            OrderDepth::new()
                .with_bid(dec!(10002), 4)
                .with_ask(dec!(9998), 3),
        );

        let orders = run(&mut mm, &state, &FairValueEstimator::default());
        assert_eq!(
            orders,
            vec![
                Order::new(Product::Pearls, dec!(9998), 3),
                Order::new(Product::Pearls, dec!(10002), -4),
            ]
        );
    }

    #[test]
    fn test_book_at_fair_value_does_nothing() {
        let mut mm = fixed(Product::Pearls, dec!(10000));
        let state = TradingState::new(0).with_depth(
            Product::Pearls,
            OrderDepth::new()
                .with_bid(dec!(9996), 4)
                .with_ask(dec!(10000), 3),
        );

        assert!(run(&mut mm, &state, &FairValueEstimator::default()).is_empty());
    }

    #[test]
    fn test_size_clamped_by_position() {
        let mut mm = fixed(Product::Pearls, dec!(10000));
        let state = TradingState::new(0)
            .with_depth(Product::Pearls, OrderDepth::new().with_ask(dec!(9990), 12))
            .with_position(Product::Pearls, 18);

        let orders = run(&mut mm, &state, &FairValueEstimator::default());
        assert_eq!(orders, vec![Order::new(Product::Pearls, dec!(9990), 2)]);
    }

    #[test]
    fn test_margins_widen_band() {
        let mut mm = MarketMaker::new(MarketMakerConfig {
            product: Product::Pearls,
            fair_value: FairValueSource::Fixed(dec!(10000)),
            buy_discount: dec!(0.95),
            sell_premium: dec!(1.05),
        });
        let state = TradingState::new(0).with_depth(
            Product::Pearls,
            OrderDepth::new()
                .with_bid(dec!(10400), 4)
                .with_ask(dec!(9600), 3),
        );
        assert!(run(&mut mm, &state, &FairValueEstimator::default()).is_empty());

        let state = TradingState::new(0).with_depth(
            Product::Pearls,
            OrderDepth::new()
                .with_bid(dec!(10600), 4)
                .with_ask(dec!(9400), 3),
        );
        assert_eq!(run(&mut mm, &state, &FairValueEstimator::default()).len(), 2);
    }

    #[test]
    fn test_no_orders_without_vwap() {
        let mut mm = MarketMaker::new(MarketMakerConfig::default());
        let state = TradingState::new(0).with_depth(
            Product::Bananas,
            OrderDepth::new()
                .with_bid(dec!(6000), 4)
                .with_ask(dec!(4000), 3),
        );

        assert!(run(&mut mm, &state, &FairValueEstimator::default()).is_empty());
    }

    #[test]
    fn test_uses_vwap_fair_value() {
        let mut mm = MarketMaker::new(MarketMakerConfig::default());
        let mut fv = FairValueEstimator::new(FairValueConfig {
            min_samples: 2,
            max_samples: 10,
        });
        fv.record(
            Product::Bananas,
            &[Trade::new(dec!(5000), 2, 0), Trade::new(dec!(5000), 4, 100)],
        );
        let state = TradingState::new(200).with_depth(
            Product::Bananas,
            OrderDepth::new()
                .with_bid(dec!(4997), 4)
                .with_ask(dec!(4999), 3),
        );

        let orders = run(&mut mm, &state, &fv);
        assert_eq!(orders, vec![Order::new(Product::Bananas, dec!(4999), 3)]);
    }

    #[test]
    fn test_config_deserialize() {
        let config: MarketMakerConfig =
            serde_json::from_str(r#"{"product": "PEARLS", "fair_value": {"fixed": 10000}}"#)
                .unwrap();
        assert_eq!(config.fair_value, FairValueSource::Fixed(dec!(10000)));
        assert_eq!(config.buy_discount, Decimal::ONE);

        let config: MarketMakerConfig =
            serde_json::from_str(r#"{"product": "BANANAS", "fair_value": "vwap"}"#).unwrap();
        assert_eq!(config.fair_value, FairValueSource::Vwap);
    }
}
