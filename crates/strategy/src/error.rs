//! Strategy errors
//!
//! These never escape a tick: strategies log them and skip trading.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    #[error("Insufficient samples: required={required}, actual={actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("Zero variance in series (std={std})")]
    ZeroVariance { std: f64 },

    #[error("Non-finite value in fit")]
    NonFinite,

    #[error("Price not representable as f64: {0}")]
    Conversion(String),
}

pub type RegressionResult<T> = std::result::Result<T, RegressionError>;
