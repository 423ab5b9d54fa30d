//! Trader configuration
//!
//! One JSON document per round: position limits, the fair value window and
//! the list of strategies to run, each tagged by `"type"`.

use crate::error::{ConfigError, Result};
use prosperity_core::Product;
use prosperity_risk::PositionLimits;
use prosperity_strategy::{
    BasketArbitrage, BasketConfig, FairValueConfig, MarketMaker, MarketMakerConfig, PairsConfig,
    PairsEngine, RelativeValueConfig, RelativeValueTaker, Strategy, TimeWindowConfig,
    TimeWindowStrategy,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Complete trader configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderConfig {
    /// Maximum absolute position per product
    pub limits: PositionLimits,
    #[serde(default)]
    pub fair_value: FairValueConfig,
    /// Strategies in execution order
    #[serde(default)]
    pub strategies: Vec<StrategyConfig>,
}

/// One configured strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    MarketMaker(MarketMakerConfig),
    TimeWindow(TimeWindowConfig),
    Pairs(PairsConfig),
    Basket(BasketConfig),
    RelativeValue(RelativeValueConfig),
}

impl StrategyConfig {
    /// Short label used in errors and logs
    pub fn label(&self) -> String {
        match self {
            StrategyConfig::MarketMaker(c) => format!("market_maker({})", c.product),
            StrategyConfig::TimeWindow(c) => format!("time_window({})", c.product),
            StrategyConfig::Pairs(c) => format!("pairs({}/{})", c.leg_a, c.leg_b),
            StrategyConfig::Basket(c) => format!("basket({})", c.basket),
            StrategyConfig::RelativeValue(c) => {
                format!("relative_value({}/{})", c.first, c.second)
            }
        }
    }

    /// Products this strategy will place orders in
    pub fn products(&self) -> Vec<Product> {
        match self {
            StrategyConfig::MarketMaker(c) => vec![c.product],
            StrategyConfig::TimeWindow(c) => vec![c.product],
            StrategyConfig::Pairs(c) => vec![c.leg_a, c.leg_b],
            StrategyConfig::Basket(c) => c
                .components
                .keys()
                .copied()
                .chain(std::iter::once(c.basket))
                .collect(),
            StrategyConfig::RelativeValue(c) => vec![c.first, c.second],
        }
    }

    /// Check the strategy's own parameters
    fn validate(&self) -> Result<()> {
        match self {
            StrategyConfig::MarketMaker(_) => Ok(()),
            StrategyConfig::TimeWindow(c) => {
                if c.buy_cutoff > c.sell_starts {
                    return Err(ConfigError::InvalidCutoffs {
                        product: c.product,
                        buy_cutoff: c.buy_cutoff,
                        sell_starts: c.sell_starts,
                    });
                }
                Ok(())
            }
            StrategyConfig::Pairs(c) => {
                if c.leg_a == c.leg_b {
                    return Err(ConfigError::SameLeg(c.leg_a));
                }
                let thresholds_ok = c.flat_threshold.is_finite()
                    && c.entry_threshold.is_finite()
                    && c.flat_threshold >= 0.0
                    && c.flat_threshold < c.entry_threshold;
                if !thresholds_ok {
                    return Err(ConfigError::InvalidThresholds {
                        flat: c.flat_threshold,
                        entry: c.entry_threshold,
                    });
                }
                if let Some(limit) = c.history_limit
                    && limit < 2
                {
                    return Err(ConfigError::InvalidHistory { limit });
                }
                Ok(())
            }
            StrategyConfig::Basket(c) => {
                if c.components.is_empty() {
                    return Err(ConfigError::EmptyBasket(c.basket));
                }
                if c.components.contains_key(&c.basket) {
                    return Err(ConfigError::SameLeg(c.basket));
                }
                if let Some((component, weight)) = c.components.iter().find(|(_, w)| **w <= 0) {
                    return Err(ConfigError::InvalidWeight {
                        basket: c.basket,
                        component: *component,
                        weight: *weight,
                    });
                }
                Ok(())
            }
            StrategyConfig::RelativeValue(c) => {
                if c.first == c.second {
                    return Err(ConfigError::SameLeg(c.first));
                }
                Ok(())
            }
        }
    }

    /// Instantiate the configured strategy
    pub fn build(&self) -> Box<dyn Strategy> {
        match self {
            StrategyConfig::MarketMaker(c) => Box::new(MarketMaker::new(c.clone())),
            StrategyConfig::TimeWindow(c) => Box::new(TimeWindowStrategy::new(c.clone())),
            StrategyConfig::Pairs(c) => Box::new(PairsEngine::new(c.clone())),
            StrategyConfig::Basket(c) => Box::new(BasketArbitrage::new(c.clone())),
            StrategyConfig::RelativeValue(c) => Box::new(RelativeValueTaker::new(c.clone())),
        }
    }
}

/// Load trader configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TraderConfig> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<TraderConfig> {
    let config: TraderConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<TraderConfig> {
    let default_config = include_str!("default_config.json");
    load_config_from_str(default_config)
}

impl TraderConfig {
    /// Resolve which strategy owns each product (index into `strategies`)
    ///
    /// A product may be owned by at most one strategy.
    pub fn roles(&self) -> Result<BTreeMap<Product, usize>> {
        let mut roles: BTreeMap<Product, usize> = BTreeMap::new();
        for (index, strategy) in self.strategies.iter().enumerate() {
            for product in strategy.products() {
                if let Some(&owner) = roles.get(&product) {
                    return Err(ConfigError::DuplicateRole {
                        product,
                        first: self.strategies[owner].label(),
                        second: strategy.label(),
                    });
                }
                roles.insert(product, index);
            }
        }
        Ok(roles)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let window = &self.fair_value;
        if window.min_samples == 0 || window.min_samples > window.max_samples {
            return Err(ConfigError::InvalidWindow {
                min_samples: window.min_samples,
                max_samples: window.max_samples,
            });
        }

        for strategy in &self.strategies {
            strategy.validate()?;
            if let Some(product) = strategy
                .products()
                .into_iter()
                .find(|p| !self.limits.contains(*p))
            {
                return Err(ConfigError::MissingLimit {
                    strategy: strategy.label(),
                    product,
                });
            }
        }

        self.roles().map(|_| ())
    }
}
