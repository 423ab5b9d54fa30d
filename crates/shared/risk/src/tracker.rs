use crate::limits::PositionLimits;
use log::debug;
use prosperity_core::{Order, Product, Quantity};
use std::collections::HashMap;

/// Clamps candidate order sizes against the current position and limit
///
/// Pure view over the tick's confirmed positions: it never mutates a
/// position. Positions only change through fills the caller applies
/// before the next tick.
#[derive(Debug, Clone, Copy)]
pub struct LimitTracker<'a> {
    limits: &'a PositionLimits,
    positions: &'a HashMap<Product, Quantity>,
}

impl<'a> LimitTracker<'a> {
    pub fn new(limits: &'a PositionLimits, positions: &'a HashMap<Product, Quantity>) -> Self {
        Self { limits, positions }
    }

    /// Current net position (flat if unknown)
    pub fn position(&self, product: Product) -> Quantity {
        self.positions.get(&product).copied().unwrap_or(0)
    }

    pub fn limit(&self, product: Product) -> Quantity {
        self.limits.limit(product)
    }

    /// Units that can still be bought without exceeding `+limit`
    pub fn buy_headroom(&self, product: Product) -> Quantity {
        (self.limit(product) - self.position(product)).max(0)
    }

    /// Units that can still be sold without going below `-limit`
    pub fn sell_headroom(&self, product: Product) -> Quantity {
        (self.limit(product) + self.position(product)).max(0)
    }

    /// Clamp a buy request to `[0, buy_headroom]`
    ///
    /// A non-positive request clamps to zero rather than flipping side.
    pub fn clamp_buy(&self, product: Product, requested: Quantity) -> Quantity {
        let clamped = requested.max(0).min(self.buy_headroom(product));
        if clamped != requested.max(0) {
            debug!(
                "[{}] Buy clamped: requested={}, allowed={}, pos={}, limit={}",
                product,
                requested,
                clamped,
                self.position(product),
                self.limit(product)
            );
        }
        clamped
    }

    /// Clamp a sell request (negative quantity) to `[-sell_headroom, 0]`
    ///
    /// A non-negative request clamps to zero rather than flipping side.
    pub fn clamp_sell(&self, product: Product, requested: Quantity) -> Quantity {
        let wanted = requested.min(0);
        let clamped = wanted.max(-self.sell_headroom(product));
        if clamped != wanted {
            debug!(
                "[{}] Sell clamped: requested={}, allowed={}, pos={}, limit={}",
                product,
                requested,
                clamped,
                self.position(product),
                self.limit(product)
            );
        }
        clamped
    }

    /// Would a full fill of `order`, on top of `committed` units already
    /// accepted on the same side this tick, leave the position outside
    /// `[-limit, +limit]`?
    pub fn would_breach_after(&self, order: &Order, committed: Quantity) -> bool {
        let limit = self.limit(order.product);
        let after = self.position(order.product) + committed + order.quantity;
        after > limit || after < -limit
    }
}
