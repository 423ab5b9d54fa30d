//! Configuration errors
//!
//! Only construction can fail. Once a `Trader` exists every tick succeeds,
//! at worst with no orders.

use prosperity_core::{Product, Quantity};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No position limit for {product} (used by {strategy})")]
    MissingLimit { strategy: String, product: Product },

    #[error("{product} claimed by both {first} and {second}")]
    DuplicateRole {
        product: Product,
        first: String,
        second: String,
    },

    #[error("Invalid z-score thresholds: flat={flat}, entry={entry} (need 0 <= flat < entry)")]
    InvalidThresholds { flat: f64, entry: f64 },

    #[error("Invalid fair value window: min_samples={min_samples}, max_samples={max_samples}")]
    InvalidWindow {
        min_samples: usize,
        max_samples: usize,
    },

    #[error("Pairs history limit {limit} keeps fewer than 2 samples, no hedge ratio can be fitted")]
    InvalidHistory { limit: usize },

    #[error("Invalid time window for {product}: buy_cutoff={buy_cutoff} > sell_starts={sell_starts}")]
    InvalidCutoffs {
        product: Product,
        buy_cutoff: i64,
        sell_starts: i64,
    },

    #[error("Basket {0} has no components")]
    EmptyBasket(Product),

    #[error("Basket {basket}: component {component} has weight {weight}")]
    InvalidWeight {
        basket: Product,
        component: Product,
        weight: Quantity,
    },

    #[error("{0} used as both legs")]
    SameLeg(Product),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
