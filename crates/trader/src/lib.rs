//! Prosperity Trader - Tick Orchestrator
//!
//! Entry point of the decision core. A `Trader` is built once from a
//! `TraderConfig` and then called once per exchange snapshot:
//!
//! - **Config**: position limits, fair value window, strategy list (JSON)
//! - **Roles**: each product is owned by exactly one strategy
//! - **Run**: ingest trades, run strategies, guard limits, aggregate orders
//!
//! ## Architecture
//!
//! ```text
//!   TraderConfig (JSON) ──► Trader::new ──► roles + strategies
//!
//!   TradingState ──► Trader::run
//!                       │
//!                       ├─► FairValueEstimator::record (all products)
//!                       ├─► Strategy::on_tick (configuration order)
//!                       ├─► limit guard (per product)
//!                       ▼
//!              BTreeMap<Product, Vec<Order>>
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prosperity_trader::Trader;
//!
//! let mut trader = Trader::from_default()?;
//! let orders = trader.run(&state);
//! ```

pub mod config;
pub mod error;
pub mod trader;

// Re-export main types
pub use config::{StrategyConfig, TraderConfig, load_config, load_config_from_str, load_default_config};
pub use error::{ConfigError, Result};
pub use trader::Trader;
