//! Price-to-return conversion.

use super::error::{AnalyticsError, Result};
use super::types::validate_prices;

/// Simple fractional returns between consecutive prices.
///
/// `returns[i] = (prices[i + 1] - prices[i]) / prices[i]`, so the output has
/// one element fewer than the input.
///
/// # Errors
/// `InsufficientData` for fewer than two prices, `InvalidPrice` for any
/// non-positive or non-finite value.
pub fn compute_returns(prices: &[f64]) -> Result<Vec<f64>> {
    if prices.len() < 2 {
        return Err(AnalyticsError::insufficient_data(2, prices.len()));
    }
    validate_prices(prices)?;

    Ok(prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect())
}

/// Continuously compounded returns, `ln(prices[i + 1] / prices[i])`.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>> {
    if prices.len() < 2 {
        return Err(AnalyticsError::insufficient_data(2, prices.len()));
    }
    validate_prices(prices)?;

    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}
