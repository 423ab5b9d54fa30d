//! Prosperity Risk
//!
//! Static per-product position limits and the tracker every strategy
//! routes candidate order sizes through before emitting them.

mod limits;
mod tracker;

pub use limits::PositionLimits;
pub use tracker::LimitTracker;
