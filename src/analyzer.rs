//! Configured entry point over the analytics functions.
//!
//! `RiskAnalyzer` carries an [`AnalyticsConfig`] so callers set the optional
//! parameters once instead of threading them through every call. It holds
//! no mutable state and is cheap to clone and share.

use rayon::prelude::*;
use tracing::debug;

use crate::core::config::AnalyticsConfig;
use crate::core::error::{AnalyticsError, Result};
use crate::core::returns::compute_returns;
use crate::core::types::RiskMetrics;
use crate::indicators::{moving_average, rsi};
use crate::metrics::{
    alpha_with, beta, calculate_all_metrics_with, max_drawdown, sharpe_ratio_with, value_at_risk,
    volatility,
};
use crate::predictor::Predictor;
use crate::report::{format_with_confidence, FormattedMetrics};

/// Risk analytics bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct RiskAnalyzer {
    config: AnalyticsConfig,
}

impl RiskAnalyzer {
    /// Create an analyzer, rejecting out-of-domain configuration.
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration in use.
    #[inline]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Simple returns of `prices`.
    pub fn returns(&self, prices: &[f64]) -> Result<Vec<f64>> {
        compute_returns(prices)
    }

    /// Population standard deviation of `returns`.
    pub fn volatility(&self, returns: &[f64]) -> Result<f64> {
        volatility(returns)
    }

    /// Annualized Sharpe ratio at the configured risk-free rate.
    pub fn sharpe_ratio(&self, returns: &[f64]) -> Result<f64> {
        sharpe_ratio_with(
            returns,
            self.config.risk_free_annual,
            self.config.trading_days,
        )
    }

    /// Beta of asset returns against market returns.
    pub fn beta(&self, asset_returns: &[f64], market_returns: &[f64]) -> Result<f64> {
        beta(asset_returns, market_returns)
    }

    /// Daily Jensen's alpha at the configured risk-free rate.
    pub fn alpha(&self, asset_returns: &[f64], market_returns: &[f64], beta: f64) -> Result<f64> {
        alpha_with(
            asset_returns,
            market_returns,
            beta,
            self.config.risk_free_annual,
            self.config.trading_days,
        )
    }

    /// Historical VaR at the configured confidence.
    pub fn value_at_risk(&self, returns: &[f64]) -> Result<f64> {
        value_at_risk(returns, self.config.var_confidence)
    }

    /// Maximum drawdown of `prices` as a fraction.
    pub fn max_drawdown(&self, prices: &[f64]) -> Result<f64> {
        max_drawdown(prices)
    }

    /// Moving average over the configured period.
    pub fn moving_average(&self, prices: &[f64]) -> Result<Vec<f64>> {
        moving_average(prices, self.config.moving_average_period)
    }

    /// RSI over the configured period.
    pub fn rsi(&self, prices: &[f64]) -> Result<Vec<f64>> {
        rsi(prices, self.config.rsi_period)
    }

    /// Every risk metric for one asset, using this configuration.
    pub fn calculate_all_metrics(
        &self,
        asset_prices: &[f64],
        market_prices: &[f64],
    ) -> Result<RiskMetrics> {
        calculate_all_metrics_with(asset_prices, market_prices, &self.config)
    }

    /// Metrics for many assets against one benchmark, computed in parallel.
    ///
    /// Results keep the input order; one failing asset does not affect the
    /// others.
    pub fn analyze_batch<S>(
        &self,
        assets: &[S],
        market_prices: &[f64],
    ) -> Vec<Result<RiskMetrics>>
    where
        S: AsRef<[f64]> + Sync,
    {
        debug!(assets = assets.len(), "analyzing batch");
        assets
            .par_iter()
            .map(|asset| self.calculate_all_metrics(asset.as_ref(), market_prices))
            .collect()
    }

    /// Last `prediction_window` prices of `prices`.
    pub fn prediction_window<'a>(&self, prices: &'a [f64]) -> Result<&'a [f64]> {
        let size = self.config.prediction_window;
        if prices.len() < size {
            return Err(AnalyticsError::insufficient_data(size, prices.len()));
        }
        Ok(&prices[prices.len() - size..])
    }

    /// Forecast the next price from the trailing window of `prices`.
    pub fn forecast<P>(&self, predictor: &P, prices: &[f64]) -> Result<f64>
    where
        P: Predictor + ?Sized,
    {
        if predictor.window_size() != self.config.prediction_window {
            return Err(AnalyticsError::invalid_parameter(format!(
                "predictor {} expects {} prices, analyzer window is {}",
                predictor.name(),
                predictor.window_size(),
                self.config.prediction_window
            )));
        }
        predictor.predict(self.prediction_window(prices)?)
    }

    /// Display strings labelled with this analyzer's VaR confidence.
    pub fn format(&self, metrics: &RiskMetrics) -> FormattedMetrics {
        format_with_confidence(metrics, self.config.var_confidence)
    }
}
