use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Timestamp};

/// A confirmed trade in one product, immutable once recorded
///
/// Market trades feed the fair value estimator; own trades are what the
/// caller uses to maintain positions between ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub price: Price,
    pub quantity: Quantity,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
}

impl Trade {
    /// Create an anonymous trade
    pub fn new(price: Price, quantity: Quantity, timestamp: Timestamp) -> Self {
        Self {
            price,
            quantity,
            timestamp,
            buyer: None,
            seller: None,
        }
    }

    /// Notional value (price * quantity)
    pub fn notional(&self) -> Price {
        self.price * Price::from(self.quantity)
    }
}
