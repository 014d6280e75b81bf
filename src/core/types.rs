//! Core data types for riskcore.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::error::{AnalyticsError, Result};

/// Type alias for price values.
pub type Price = f64;

/// Check that every price is positive and finite.
pub fn validate_prices(prices: &[Price]) -> Result<()> {
    match prices
        .iter()
        .enumerate()
        .find(|(_, &p)| !(p.is_finite() && p > 0.0))
    {
        Some((index, &value)) => Err(AnalyticsError::invalid_price(index, value)),
        None => Ok(()),
    }
}

/// Check that every value is finite. Sign is not constrained.
pub fn validate_finite(values: &[f64]) -> Result<()> {
    match values.iter().enumerate().find(|(_, &v)| !v.is_finite()) {
        Some((index, &value)) => Err(AnalyticsError::invalid_price(index, value)),
        None => Ok(()),
    }
}

/// Validated price series, oldest observation first.
///
/// Every value is positive and finite. Length is not constrained here;
/// operations enforce their own minimums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PriceSeries(Vec<Price>);

impl PriceSeries {
    /// Create a price series, rejecting non-positive or non-finite values.
    pub fn new(prices: Vec<Price>) -> Result<Self> {
        validate_prices(&prices)?;
        Ok(Self(prices))
    }

    /// Get the number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most recent price.
    #[inline]
    pub fn last(&self) -> Option<Price> {
        self.0.last().copied()
    }

    /// Trailing window of at most `size` observations.
    pub fn tail(&self, size: usize) -> &[Price] {
        &self.0[self.0.len().saturating_sub(size)..]
    }

    /// Slice of prices.
    #[inline]
    pub fn as_slice(&self) -> &[Price] {
        &self.0
    }

    /// Consume into the underlying vector.
    pub fn into_inner(self) -> Vec<Price> {
        self.0
    }
}

impl Deref for PriceSeries {
    type Target = [Price];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Price]> for PriceSeries {
    fn as_ref(&self) -> &[Price] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = AnalyticsError;

    fn try_from(prices: Vec<f64>) -> Result<Self> {
        Self::new(prices)
    }
}

impl From<PriceSeries> for Vec<f64> {
    fn from(series: PriceSeries) -> Self {
        series.0
    }
}

/// Aggregate risk metrics for one asset against a benchmark.
///
/// Ratios are plain fractions; VaR is a positive loss magnitude and
/// drawdown a fraction of the running peak.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub sharpe_ratio: f64,
    pub beta: f64,
    pub alpha: f64,
    pub value_at_risk: f64,
    pub max_drawdown: f64,
    pub volatility: f64,
}
