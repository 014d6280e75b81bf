//! Analytics configuration.

use serde::{Deserialize, Serialize};

use super::error::{AnalyticsError, Result};

/// Annual risk-free rate used by Sharpe ratio and alpha.
pub const DEFAULT_RISK_FREE_ANNUAL: f64 = 0.02;
/// Trading days per year for daily/annual conversion.
pub const DEFAULT_TRADING_DAYS: usize = 252;
/// Confidence level for Value-at-Risk.
pub const DEFAULT_VAR_CONFIDENCE: f64 = 0.95;
/// Moving average window.
pub const DEFAULT_MOVING_AVERAGE_PERIOD: usize = 20;
/// RSI lookback.
pub const DEFAULT_RSI_PERIOD: usize = 14;
/// Trailing window consumed by the price predictor.
pub const DEFAULT_PREDICTION_WINDOW: usize = 10;

/// Optional parameters accepted by the analytics core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Annual risk-free rate (fraction, e.g. 0.02).
    pub risk_free_annual: f64,
    /// Trading days per year.
    pub trading_days: usize,
    /// VaR confidence level in (0, 1).
    pub var_confidence: f64,
    /// Moving average period.
    pub moving_average_period: usize,
    /// RSI period.
    pub rsi_period: usize,
    /// Predictor window size.
    pub prediction_window: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            risk_free_annual: DEFAULT_RISK_FREE_ANNUAL,
            trading_days: DEFAULT_TRADING_DAYS,
            var_confidence: DEFAULT_VAR_CONFIDENCE,
            moving_average_period: DEFAULT_MOVING_AVERAGE_PERIOD,
            rsi_period: DEFAULT_RSI_PERIOD,
            prediction_window: DEFAULT_PREDICTION_WINDOW,
        }
    }
}

impl AnalyticsConfig {
    /// Set the annual risk-free rate.
    pub fn with_risk_free_annual(mut self, rate: f64) -> Self {
        self.risk_free_annual = rate;
        self
    }

    /// Set the VaR confidence level.
    pub fn with_var_confidence(mut self, confidence: f64) -> Self {
        self.var_confidence = confidence;
        self
    }

    /// Daily risk-free rate.
    #[inline]
    pub fn risk_free_daily(&self) -> f64 {
        self.risk_free_annual / self.trading_days as f64
    }

    /// Check every field is inside its domain.
    pub fn validate(&self) -> Result<()> {
        if !self.risk_free_annual.is_finite() {
            return Err(AnalyticsError::invalid_parameter(
                "risk_free_annual must be finite",
            ));
        }
        if self.trading_days == 0 {
            return Err(AnalyticsError::invalid_parameter(
                "trading_days must be > 0",
            ));
        }
        validate_confidence(self.var_confidence)?;
        if self.moving_average_period == 0 {
            return Err(AnalyticsError::invalid_parameter(
                "moving_average_period must be > 0",
            ));
        }
        if self.rsi_period == 0 {
            return Err(AnalyticsError::invalid_parameter("rsi_period must be > 0"));
        }
        if self.prediction_window < 2 {
            return Err(AnalyticsError::invalid_parameter(
                "prediction_window must be >= 2",
            ));
        }
        Ok(())
    }
}

/// Confidence must lie strictly inside (0, 1).
pub fn validate_confidence(confidence: f64) -> Result<()> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(AnalyticsError::invalid_parameter(format!(
            "confidence must be in (0, 1), got {confidence}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyticsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rsi_period, 14);
        assert_eq!(config.moving_average_period, 20);
        assert!((config.risk_free_daily() - 0.02 / 252.0).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_config() {
        assert!(AnalyticsConfig::default()
            .with_var_confidence(1.0)
            .validate()
            .is_err());
        assert!(AnalyticsConfig::default()
            .with_risk_free_annual(f64::NAN)
            .validate()
            .is_err());

        let config = AnalyticsConfig {
            rsi_period: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_confidence_bounds() {
        assert!(validate_confidence(0.0).is_err());
        assert!(validate_confidence(1.0).is_err());
        assert!(validate_confidence(f64::NAN).is_err());
        assert!(validate_confidence(0.99).is_ok());
    }
}
