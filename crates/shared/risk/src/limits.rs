use prosperity_core::{Product, Quantity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum absolute net position per product
///
/// Supplied externally for each round. A product without an entry has a
/// limit of zero and therefore cannot be traded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionLimits(HashMap<Product, Quantity>);

impl PositionLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for a product (stored as an absolute value)
    pub fn with_limit(mut self, product: Product, limit: Quantity) -> Self {
        self.0.insert(product, limit.abs());
        self
    }

    /// Limit for a product, zero if not configured
    pub fn limit(&self, product: Product) -> Quantity {
        self.0.get(&product).map(|l| l.abs()).unwrap_or(0)
    }

    pub fn contains(&self, product: Product) -> bool {
        self.0.contains_key(&product)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Product, Quantity)> + '_ {
        self.0.iter().map(|(p, l)| (*p, l.abs()))
    }
}

impl FromIterator<(Product, Quantity)> for PositionLimits {
    fn from_iter<I: IntoIterator<Item = (Product, Quantity)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(p, l)| (p, l.abs())).collect())
    }
}
