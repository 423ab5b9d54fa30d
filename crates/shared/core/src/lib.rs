//! Prosperity Core Domain
//!
//! Pure domain types for the per-tick trading decision core.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Order, OrderDepth, Side, Trade, TradingState};
pub use instruments::{ParseProductError, Product};
pub use values::{Price, Quantity, Timestamp};
