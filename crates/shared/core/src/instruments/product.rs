use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A tradable good listed on the exchange
///
/// Serialized with the venue's upper-case symbols (`PINA_COLADAS`, ...),
/// so snapshots and config files can use the names the exchange publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Product {
    Pearls,
    Bananas,
    Coconuts,
    PinaColadas,
    DivingGear,
    Berries,
    DolphinSightings,
    Baguette,
    Dip,
    Ukulele,
    PicnicBasket,
}

impl Product {
    /// Every listed product, in declaration order
    pub const ALL: [Product; 11] = [
        Product::Pearls,
        Product::Bananas,
        Product::Coconuts,
        Product::PinaColadas,
        Product::DivingGear,
        Product::Berries,
        Product::DolphinSightings,
        Product::Baguette,
        Product::Dip,
        Product::Ukulele,
        Product::PicnicBasket,
    ];

    /// Venue symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Product::Pearls => "PEARLS",
            Product::Bananas => "BANANAS",
            Product::Coconuts => "COCONUTS",
            Product::PinaColadas => "PINA_COLADAS",
            Product::DivingGear => "DIVING_GEAR",
            Product::Berries => "BERRIES",
            Product::DolphinSightings => "DOLPHIN_SIGHTINGS",
            Product::Baguette => "BAGUETTE",
            Product::Dip => "DIP",
            Product::Ukulele => "UKULELE",
            Product::PicnicBasket => "PICNIC_BASKET",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown product: {0}")]
pub struct ParseProductError(pub String);

impl FromStr for Product {
    type Err = ParseProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Product::ALL
            .into_iter()
            .find(|p| p.symbol() == s)
            .ok_or_else(|| ParseProductError(s.to_string()))
    }
}
