//! Pairs Statistical-Arbitrage Engine
//!
//! Trades the spread between two correlated products:
//! - Records both mid prices every tick both books are two-sided
//! - Refits the hedge ratio `m` (OLS of A on B, with intercept)
//! - Standardizes the spread `A - m*B` against its full history
//! - Flattens both legs once the spread is back near its mean
//! - Opens a hedged position when the z-score leaves the entry band
//!
//! Leg sizes are bounded by best-level depth and limit headroom on both
//! sides, then balanced through the hedge ratio. Magnitudes are truncated
//! toward zero before the side's sign is applied.

use crate::error::RegressionResult;
use crate::regression::{self, HedgeFit};
use crate::strategy::{Strategy, StrategyContext};
use log::{debug, info};
use prosperity_core::{Order, Price, Product, Quantity, Side};
use serde::{Deserialize, Serialize};

/// Configuration for the pairs engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairsConfig {
    /// Dependent leg (A in `A ≈ m*B`)
    pub leg_a: Product,
    /// Hedge leg (B)
    pub leg_b: Product,
    /// |z| below this flattens both legs
    #[serde(default = "default_flat_threshold")]
    pub flat_threshold: f64,
    /// |z| above this opens a spread position
    #[serde(default = "default_entry_threshold")]
    pub entry_threshold: f64,
    /// Optional cap on retained samples (unbounded if `None`)
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Default for PairsConfig {
    fn default() -> Self {
        Self {
            leg_a: Product::PinaColadas,
            leg_b: Product::Coconuts,
            flat_threshold: default_flat_threshold(),
            entry_threshold: default_entry_threshold(),
            history_limit: None,
        }
    }
}

fn default_flat_threshold() -> f64 {
    0.5
}

fn default_entry_threshold() -> f64 {
    1.5
}

/// What the current z-score calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadSignal {
    /// Spread has reverted: close both legs
    Flatten,
    /// A rich relative to B: short A, long B
    ShortSpread,
    /// A cheap relative to B: long A, short B
    LongSpread,
    /// Dead zone between the flat and entry bands
    Hold,
}

impl SpreadSignal {
    pub fn classify(z: f64, flat_threshold: f64, entry_threshold: f64) -> Self {
        if z.abs() < flat_threshold {
            SpreadSignal::Flatten
        } else if z > entry_threshold {
            SpreadSignal::ShortSpread
        } else if z < -entry_threshold {
            SpreadSignal::LongSpread
        } else {
            SpreadSignal::Hold
        }
    }
}

/// Internal state carried across ticks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairsState {
    pub mids_a: Vec<f64>,
    pub mids_b: Vec<f64>,
    pub differences: Vec<f64>,
    pub fit: Option<HedgeFit>,
    pub last_z: Option<f64>,
}

impl PairsState {
    fn record_mids(&mut self, a: f64, b: f64, limit: Option<usize>) {
        self.mids_a.push(a);
        self.mids_b.push(b);
        if let Some(limit) = limit {
            trim_front(&mut self.mids_a, limit);
            trim_front(&mut self.mids_b, limit);
        }
    }

    fn record_difference(&mut self, difference: f64, limit: Option<usize>) {
        self.differences.push(difference);
        if let Some(limit) = limit {
            trim_front(&mut self.differences, limit);
        }
    }
}

fn trim_front(series: &mut Vec<f64>, limit: usize) {
    let excess = series.len().saturating_sub(limit);
    if excess > 0 {
        series.drain(..excess);
    }
}

/// Size both legs of a hedged entry
///
/// `cap_a` and `cap_b` are the unsigned sizes each leg can trade (book depth
/// after limit clamping). Returns unsigned `(qty_a, qty_b)` with
/// `qty_a = trunc(min(cap_a, cap_b / slope))` and `qty_b = trunc(qty_a * slope)`.
/// A non-positive or non-finite slope yields no legs.
pub fn hedge_sizes(cap_a: Quantity, cap_b: Quantity, slope: f64) -> (Quantity, Quantity) {
    if !slope.is_finite() || slope <= 0.0 || cap_a <= 0 || cap_b <= 0 {
        return (0, 0);
    }
    let units_a = (cap_a as f64).min(cap_b as f64 / slope).trunc();
    if units_a <= 0.0 {
        return (0, 0);
    }
    let qty_a = units_a as Quantity;
    let qty_b = (units_a * slope).trunc() as Quantity;
    (qty_a.clamp(0, cap_a), qty_b.clamp(0, cap_b))
}

/// Two-product spread trader
#[derive(Debug, Clone)]
pub struct PairsEngine {
    config: PairsConfig,
    state: PairsState,
}

impl PairsEngine {
    pub fn new(config: PairsConfig) -> Self {
        Self {
            config,
            state: PairsState::default(),
        }
    }

    pub fn config(&self) -> &PairsConfig {
        &self.config
    }

    pub fn state(&self) -> &PairsState {
        &self.state
    }

    /// Record one pair of mids and return the spread's z-score and the fit
    ///
    /// Mids are retained even when no z-score can be formed yet.
    pub fn observe(&mut self, mid_a: Price, mid_b: Price) -> RegressionResult<(f64, HedgeFit)> {
        self.state.last_z = None;
        let a = regression::price_to_f64(mid_a)?;
        let b = regression::price_to_f64(mid_b)?;
        let limit = self.config.history_limit;

        self.state.record_mids(a, b, limit);
        let fit = regression::fit_hedge_ratio(&self.state.mids_a, &self.state.mids_b)?;
        self.state.fit = Some(fit);

        let difference = fit.spread(a, b);
        self.state.record_difference(difference, limit);
        let stats = regression::spread_stats(&self.state.differences)?;

        let z = stats.z_score(difference);
        self.state.last_z = Some(z);
        Ok((z, fit))
    }

    /// Best price on `side` and how much of it we may trade (unsigned)
    fn capacity(
        &self,
        ctx: &StrategyContext<'_>,
        product: Product,
        side: Side,
    ) -> Option<(Price, Quantity)> {
        let book = ctx.book(product);
        match side {
            Side::Buy => {
                let (price, volume) = book.best_ask()?;
                Some((price, ctx.limits.clamp_buy(product, -volume)))
            }
            Side::Sell => {
                let (price, volume) = book.best_bid()?;
                Some((price, -ctx.limits.clamp_sell(product, -volume)))
            }
        }
    }

    /// Open (or add to) a spread position with A on `side_a`
    fn enter(&self, ctx: &StrategyContext<'_>, side_a: Side, slope: f64) -> Vec<Order> {
        let (leg_a, leg_b) = (self.config.leg_a, self.config.leg_b);
        let side_b = side_a.opposite();

        let (Some((price_a, cap_a)), Some((price_b, cap_b))) = (
            self.capacity(ctx, leg_a, side_a),
            self.capacity(ctx, leg_b, side_b),
        ) else {
            return Vec::new();
        };

        let (qty_a, qty_b) = hedge_sizes(cap_a, cap_b, slope);
        let mut orders = Vec::new();
        if qty_a > 0 {
            orders.push(Order::new(leg_a, price_a, side_a.signum() * qty_a));
        }
        if qty_b > 0 {
            orders.push(Order::new(leg_b, price_b, side_b.signum() * qty_b));
        }
        orders
    }

    /// Close any open position in both legs at the opposite best quote
    fn flatten(&self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        [self.config.leg_a, self.config.leg_b]
            .into_iter()
            .filter_map(|product| {
                let position = ctx.position(product);
                let book = ctx.book(product);
                if position > 0 {
                    let (bid, _) = book.best_bid()?;
                    let quantity = ctx.limits.clamp_sell(product, -position);
                    (quantity < 0).then(|| Order::new(product, bid, quantity))
                } else if position < 0 {
                    let (ask, _) = book.best_ask()?;
                    let quantity = ctx.limits.clamp_buy(product, -position);
                    (quantity > 0).then(|| Order::new(product, ask, quantity))
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Strategy for PairsEngine {
    fn name(&self) -> &str {
        "PairsArbitrage"
    }

    fn products(&self) -> Vec<Product> {
        vec![self.config.leg_a, self.config.leg_b]
    }

    fn on_tick(&mut self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        let (leg_a, leg_b) = (self.config.leg_a, self.config.leg_b);
        let (Some(mid_a), Some(mid_b)) = (ctx.book(leg_a).mid_price(), ctx.book(leg_b).mid_price())
        else {
            debug!("[{}/{}] Missing quotes, skipping tick", leg_a, leg_b);
            return Vec::new();
        };

        let (z, fit) = match self.observe(mid_a, mid_b) {
            Ok(observed) => observed,
            Err(e) => {
                debug!("[{}/{}] No signal: {}", leg_a, leg_b, e);
                return Vec::new();
            }
        };

        let signal =
            SpreadSignal::classify(z, self.config.flat_threshold, self.config.entry_threshold);
        let orders = match signal {
            SpreadSignal::Flatten => self.flatten(ctx),
            SpreadSignal::ShortSpread => self.enter(ctx, Side::Sell, fit.slope),
            SpreadSignal::LongSpread => self.enter(ctx, Side::Buy, fit.slope),
            SpreadSignal::Hold => Vec::new(),
        };

        if orders.is_empty() {
            debug!(
                "[{}/{}] {:?} z={:.3} m={:.4}: no orders",
                leg_a, leg_b, signal, z, fit.slope
            );
        }
        for order in &orders {
            info!(
                "[{}] {:?} z={:.3} m={:.4}: {}",
                self.name(),
                signal,
                z,
                fit.slope,
                order
            );
        }
        orders
    }
}
