//! Least-squares hedge ratio and spread statistics
//!
//! Both are recomputed from the full retained history on every call.
//! Incremental (streaming) estimators would give the same numbers up to
//! rounding and are a possible optimization.

use crate::error::{RegressionError, RegressionResult};
use prosperity_core::Price;
use rust_decimal::prelude::ToPrimitive;

/// Variance below which a series is treated as constant
pub const VARIANCE_EPSILON: f64 = 1e-9;

/// Standard deviation below which a z-score is undefined
pub const STD_EPSILON: f64 = 1e-9;

/// Fit of `a ≈ intercept + slope * b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HedgeFit {
    pub slope: f64,
    pub intercept: f64,
    /// Samples the fit was computed from
    pub samples: usize,
}

impl HedgeFit {
    /// Spread traded by the pairs engine: `a - slope * b` (intercept excluded)
    pub fn spread(&self, a: f64, b: f64) -> f64 {
        a - self.slope * b
    }
}

/// Ordinary least squares of `a` on `b`, with intercept
///
/// Needs at least two samples. When `b` is constant the normal equations
/// have no unique solution; the minimum-norm one is returned:
/// `(intercept, slope) = mean(a) * (1, b0) / (1 + b0^2)`.
pub fn fit_hedge_ratio(a: &[f64], b: &[f64]) -> RegressionResult<HedgeFit> {
    let n = a.len().min(b.len());
    if n < 2 {
        return Err(RegressionError::InsufficientSamples {
            required: 2,
            actual: n,
        });
    }

    let (a, b) = (&a[..n], &b[..n]);
    let mean_a = a.iter().sum::<f64>() / n as f64;
    let mean_b = b.iter().sum::<f64>() / n as f64;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (ya, xb) in a.iter().zip(b) {
        let dx = xb - mean_b;
        sxx += dx * dx;
        sxy += dx * (ya - mean_a);
    }

    let (slope, intercept) = if sxx / n as f64 <= VARIANCE_EPSILON {
        let scale = 1.0 + mean_b * mean_b;
        (mean_b * mean_a / scale, mean_a / scale)
    } else {
        let slope = sxy / sxx;
        (slope, mean_a - slope * mean_b)
    };

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(RegressionError::NonFinite);
    }

    Ok(HedgeFit {
        slope,
        intercept,
        samples: n,
    })
}

/// Population mean and standard deviation of a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadStats {
    pub mean: f64,
    pub std: f64,
}

impl SpreadStats {
    pub fn z_score(&self, value: f64) -> f64 {
        (value - self.mean) / self.std
    }
}

/// Mean and standard deviation (divide by n) over the whole series
///
/// Errors when fewer than two values exist or the deviation is zero,
/// since no z-score can be formed.
pub fn spread_stats(values: &[f64]) -> RegressionResult<SpreadStats> {
    let n = values.len();
    if n < 2 {
        return Err(RegressionError::InsufficientSamples {
            required: 2,
            actual: n,
        });
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let var = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n as f64;
    let std = var.sqrt();

    if !std.is_finite() || !mean.is_finite() {
        return Err(RegressionError::NonFinite);
    }
    if std <= STD_EPSILON {
        return Err(RegressionError::ZeroVariance { std });
    }

    Ok(SpreadStats { mean, std })
}

/// Convert an exchange price for the float math above
pub fn price_to_f64(price: Price) -> RegressionResult<f64> {
    price
        .to_f64()
        .ok_or_else(|| RegressionError::Conversion(price.to_string()))
}
