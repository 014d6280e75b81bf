//! Autoregressive return model fitted on each window.
//!
//! The model is refit from scratch on every call, so forecasts depend only
//! on the window passed in.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{validate_window, Predictor};
use crate::core::config::DEFAULT_PREDICTION_WINDOW;
use crate::core::error::{AnalyticsError, Result};
use crate::core::returns::compute_returns;

/// Fitted AR(1) coefficients: `r[t] = intercept + coefficient * r[t - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArModel {
    pub intercept: f64,
    pub coefficient: f64,
}

impl ArModel {
    /// Least-squares fit on a return series with an L2 penalty on the
    /// coefficient. Needs at least three returns.
    pub fn fit(returns: &[f64], ridge: f64) -> Result<Self> {
        if returns.len() < 3 {
            return Err(AnalyticsError::insufficient_data(3, returns.len()));
        }
        let xs = &returns[..returns.len() - 1];
        let ys = &returns[1..];
        let n = xs.len() as f64;

        let mx = xs.iter().sum::<f64>() / n;
        let my = ys.iter().sum::<f64>() / n;
        let sxx: f64 = xs.iter().map(|x| (x - mx).powi(2)).sum();
        let sxy: f64 = xs.iter().zip(ys).map(|(x, y)| (x - mx) * (y - my)).sum();

        let denom = sxx + ridge;
        let coefficient = if denom > 0.0 { sxy / denom } else { 0.0 };
        Ok(Self {
            intercept: my - coefficient * mx,
            coefficient,
        })
    }

    /// Next return given the latest one.
    #[inline]
    pub fn forecast(&self, last_return: f64) -> f64 {
        self.intercept + self.coefficient * last_return
    }
}

/// Predictor backed by an [`ArModel`] over window returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedModelPredictor {
    pub window: usize,
    /// L2 penalty on the AR coefficient; 0 is plain least squares.
    pub ridge: f64,
}

impl Default for LearnedModelPredictor {
    fn default() -> Self {
        Self {
            window: DEFAULT_PREDICTION_WINDOW,
            ridge: 0.0,
        }
    }
}

impl LearnedModelPredictor {
    /// Set the ridge penalty on the AR coefficient.
    pub fn with_ridge(mut self, ridge: f64) -> Self {
        self.ridge = ridge;
        self
    }

    /// Set the window length.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }
}

impl Predictor for LearnedModelPredictor {
    fn window_size(&self) -> usize {
        self.window
    }

    fn predict(&self, window: &[f64]) -> Result<f64> {
        if !(self.ridge.is_finite() && self.ridge >= 0.0) {
            return Err(AnalyticsError::invalid_parameter(
                "ridge penalty must be finite and >= 0",
            ));
        }
        if self.window < 4 {
            return Err(AnalyticsError::invalid_parameter(
                "learned model window must be >= 4",
            ));
        }
        validate_window(window, self.window)?;

        let returns = compute_returns(window)?;
        let model = ArModel::fit(&returns, self.ridge)?;
        let last_return = returns[returns.len() - 1];
        let last_price = window[window.len() - 1];

        trace!(
            intercept = model.intercept,
            coefficient = model.coefficient,
            "fitted AR(1) model"
        );
        Ok(last_price * (1.0 + model.forecast(last_return)))
    }

    fn name(&self) -> &str {
        "learned_ar1"
    }
}
