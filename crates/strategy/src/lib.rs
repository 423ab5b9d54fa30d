//! Prosperity Strategy Framework
//!
//! Provides the per-tick decision logic of the trader:
//! - Read-only book views over the exchange snapshot
//! - Trade-history fair value estimation (VWAP)
//! - Strategy trait driven once per tick
//! - Built-in makers, takers and arbitrage engines
//!
//! ## Architecture
//!
//! ```text
//!                         ┌────────────────────┐
//!   market trades ──────► │ FairValueEstimator │
//!                         └─────────┬──────────┘
//!                                   │ VWAP
//!                                   ▼
//! TradingState ──► BookView ──► StrategyContext ◄── LimitTracker
//!                                   │
//!                                   ▼
//!                             ┌──────────┐
//!                             │ Strategy │  (maker, window, pairs,
//!                             └────┬─────┘   basket, relative value)
//!                                  │ Vec<Order>
//!                                  ▼
//!                            Tick orchestrator
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prosperity_strategy::{MarketMaker, MarketMakerConfig, Strategy};
//!
//! let config = MarketMakerConfig {
//!     product: Product::Bananas,
//!     ..Default::default()
//! };
//! let mut strategy = MarketMaker::new(config);
//! let orders = strategy.on_tick(&ctx);
//! ```

pub mod basket;
pub mod error;
pub mod fair_value;
pub mod market_maker;
pub mod orderbook;
pub mod pairs;
pub mod regression;
pub mod relative_value;
pub mod strategy;
pub mod time_window;

// Re-export main types
pub use basket::{BasketArbitrage, BasketConfig};
pub use error::{RegressionError, RegressionResult};
pub use fair_value::{FairValueConfig, FairValueEstimator};
pub use market_maker::{FairValueSource, MarketMaker, MarketMakerConfig};
pub use orderbook::BookView;
pub use pairs::{PairsConfig, PairsEngine, PairsState, SpreadSignal, hedge_sizes};
pub use regression::{HedgeFit, SpreadStats, fit_hedge_ratio, spread_stats};
pub use relative_value::{RelativeValueConfig, RelativeValueTaker};
pub use strategy::{Strategy, StrategyContext};
pub use time_window::{TimeWindowConfig, TimeWindowStrategy, WindowPhase};
