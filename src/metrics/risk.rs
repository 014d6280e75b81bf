//! Risk metrics: volatility, Sharpe ratio, beta, alpha, Value-at-Risk.
//!
//! All functions are pure and operate on return series produced by
//! [`compute_returns`]. Zero denominators surface as
//! [`AnalyticsError::DegenerateVolatility`] rather than `inf`/`NaN`.

use tracing::debug;

use super::drawdown::max_drawdown;
use super::moments::{covariance, ensure_finite, mean, stddev, variance};
use crate::core::config::{
    validate_confidence, AnalyticsConfig, DEFAULT_RISK_FREE_ANNUAL, DEFAULT_TRADING_DAYS,
};
use crate::core::error::{AnalyticsError, Result};
use crate::core::returns::compute_returns;
use crate::core::types::RiskMetrics;

/// Denominators at or below this are treated as zero.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Volatility: population standard deviation of returns.
pub fn volatility(returns: &[f64]) -> Result<f64> {
    stddev(returns)
}

/// Annualized Sharpe ratio with a 2% annual risk-free rate over 252 days.
pub fn sharpe_ratio(returns: &[f64]) -> Result<f64> {
    sharpe_ratio_with(returns, DEFAULT_RISK_FREE_ANNUAL, DEFAULT_TRADING_DAYS)
}

/// Annualized Sharpe ratio.
///
/// `((mean - rf_annual / days) * sqrt(days)) / volatility`
pub fn sharpe_ratio_with(
    returns: &[f64],
    risk_free_annual: f64,
    trading_days: usize,
) -> Result<f64> {
    if trading_days == 0 {
        return Err(AnalyticsError::invalid_parameter("trading_days must be > 0"));
    }
    let vol = volatility(returns)?;
    if vol <= DEGENERATE_EPSILON {
        return Err(AnalyticsError::degenerate_volatility("sharpe_ratio"));
    }
    let days = trading_days as f64;
    let excess = mean(returns)? - risk_free_annual / days;
    Ok(excess * days.sqrt() / vol)
}

/// Beta of asset returns against market returns.
///
/// `covariance(asset, market) / variance(market)`
pub fn beta(asset_returns: &[f64], market_returns: &[f64]) -> Result<f64> {
    if asset_returns.len() != market_returns.len() {
        return Err(AnalyticsError::length_mismatch(
            asset_returns.len(),
            market_returns.len(),
        ));
    }
    let market_var = variance(market_returns)?;
    if market_var <= DEGENERATE_EPSILON * DEGENERATE_EPSILON {
        return Err(AnalyticsError::degenerate_volatility("beta"));
    }
    Ok(covariance(asset_returns, market_returns)? / market_var)
}

/// Daily Jensen's alpha with the default risk-free rate.
pub fn alpha(asset_returns: &[f64], market_returns: &[f64], beta: f64) -> Result<f64> {
    alpha_with(
        asset_returns,
        market_returns,
        beta,
        DEFAULT_RISK_FREE_ANNUAL,
        DEFAULT_TRADING_DAYS,
    )
}

/// Daily Jensen's alpha.
///
/// `mean(asset) - (rf_daily + beta * (mean(market) - rf_daily))`
pub fn alpha_with(
    asset_returns: &[f64],
    market_returns: &[f64],
    beta: f64,
    risk_free_annual: f64,
    trading_days: usize,
) -> Result<f64> {
    if asset_returns.len() != market_returns.len() {
        return Err(AnalyticsError::length_mismatch(
            asset_returns.len(),
            market_returns.len(),
        ));
    }
    if trading_days == 0 {
        return Err(AnalyticsError::invalid_parameter("trading_days must be > 0"));
    }
    let rf_daily = risk_free_annual / trading_days as f64;
    let asset_mean = mean(asset_returns)?;
    let market_mean = mean(market_returns)?;
    Ok(asset_mean - (rf_daily + beta * (market_mean - rf_daily)))
}

/// Historical Value-at-Risk as a positive loss magnitude.
///
/// Returns are sorted ascending and indexed at `floor((1 - confidence) * N)`
/// without interpolation, so small samples report the worst observation.
pub fn value_at_risk(returns: &[f64], confidence: f64) -> Result<f64> {
    validate_confidence(confidence)?;
    if returns.is_empty() {
        return Err(AnalyticsError::empty_series("value_at_risk"));
    }
    ensure_finite(returns, "value_at_risk")?;

    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let index = (((1.0 - confidence) * n as f64).floor() as usize).min(n - 1);
    Ok(-sorted[index])
}

/// Compute every risk metric for an asset against a market benchmark
/// using the default configuration.
pub fn calculate_all_metrics(
    asset_prices: &[f64],
    market_prices: &[f64],
) -> Result<RiskMetrics> {
    calculate_all_metrics_with(asset_prices, market_prices, &AnalyticsConfig::default())
}

/// Compute every risk metric for an asset against a market benchmark.
///
/// Beta is computed first and fed into alpha. The first failing constituent
/// aborts the whole computation.
pub fn calculate_all_metrics_with(
    asset_prices: &[f64],
    market_prices: &[f64],
    config: &AnalyticsConfig,
) -> Result<RiskMetrics> {
    let asset_returns = compute_returns(asset_prices)?;
    let market_returns = compute_returns(market_prices)?;

    let beta = beta(&asset_returns, &market_returns)?;
    let alpha = alpha_with(
        &asset_returns,
        &market_returns,
        beta,
        config.risk_free_annual,
        config.trading_days,
    )?;
    let sharpe_ratio =
        sharpe_ratio_with(&asset_returns, config.risk_free_annual, config.trading_days)?;
    let value_at_risk = value_at_risk(&asset_returns, config.var_confidence)?;
    let max_drawdown = max_drawdown(asset_prices)?;
    let volatility = volatility(&asset_returns)?;

    let metrics = RiskMetrics {
        sharpe_ratio,
        beta,
        alpha,
        value_at_risk,
        max_drawdown,
        volatility,
    };
    debug!(
        observations = asset_prices.len(),
        sharpe = metrics.sharpe_ratio,
        beta = metrics.beta,
        var = metrics.value_at_risk,
        "calculated risk metrics"
    );
    Ok(metrics)
}

impl RiskMetrics {
    /// Compute metrics from raw price series.
    pub fn from_prices(asset_prices: &[f64], market_prices: &[f64]) -> Result<Self> {
        calculate_all_metrics(asset_prices, market_prices)
    }

    /// Compute metrics from raw price series with explicit configuration.
    pub fn from_prices_with(
        asset_prices: &[f64],
        market_prices: &[f64],
        config: &AnalyticsConfig,
    ) -> Result<Self> {
        calculate_all_metrics_with(asset_prices, market_prices, config)
    }
}
