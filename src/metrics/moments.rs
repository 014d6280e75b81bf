//! Statistical moments over numeric slices.
//!
//! Variance and covariance use the population convention (divide by N)
//! everywhere the risk engine consumes them.

use crate::core::error::{AnalyticsError, Result};

/// Reject the first NaN or infinite element of `xs`.
pub(crate) fn ensure_finite(xs: &[f64], context: &str) -> Result<()> {
    match xs.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        Some((index, value)) => Err(AnalyticsError::invalid_parameter(format!(
            "{context}: non-finite value {value} at index {index}"
        ))),
        None => Ok(()),
    }
}

/// Arithmetic mean.
///
/// Every other moment goes through here, so a non-finite element is
/// rejected before it can reach a result.
pub fn mean(xs: &[f64]) -> Result<f64> {
    if xs.is_empty() {
        return Err(AnalyticsError::empty_series("mean"));
    }
    ensure_finite(xs, "mean")?;
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Population variance.
///
/// A constant series reports exactly zero.
pub fn variance(xs: &[f64]) -> Result<f64> {
    let m = mean(xs)?;
    if xs.iter().all(|&x| x == xs[0]) {
        return Ok(0.0);
    }
    Ok(xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64)
}

/// Sample variance (divide by N - 1).
pub fn sample_variance(xs: &[f64]) -> Result<f64> {
    if xs.len() < 2 {
        if xs.is_empty() {
            return Err(AnalyticsError::empty_series("sample_variance"));
        }
        return Err(AnalyticsError::insufficient_data(2, xs.len()));
    }
    let m = mean(xs)?;
    Ok(xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (xs.len() - 1) as f64)
}

/// Population standard deviation.
#[inline]
pub fn stddev(xs: &[f64]) -> Result<f64> {
    Ok(variance(xs)?.sqrt())
}

/// Population covariance of two aligned series.
pub fn covariance(xs: &[f64], ys: &[f64]) -> Result<f64> {
    if xs.len() != ys.len() {
        return Err(AnalyticsError::length_mismatch(xs.len(), ys.len()));
    }
    let mx = mean(xs)?;
    let my = mean(ys)?;
    let sum: f64 = xs.iter().zip(ys).map(|(x, y)| (x - mx) * (y - my)).sum();
    Ok(sum / xs.len() as f64)
}

/// Pearson correlation of two aligned series.
pub fn correlation(xs: &[f64], ys: &[f64]) -> Result<f64> {
    let cov = covariance(xs, ys)?;
    let denom = stddev(xs)? * stddev(ys)?;
    if denom == 0.0 {
        return Err(AnalyticsError::degenerate_volatility("correlation"));
    }
    Ok(cov / denom)
}
