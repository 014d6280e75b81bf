//! Deterministic baseline forecasts.

use serde::{Deserialize, Serialize};

use super::{validate_window, Predictor};
use crate::core::config::DEFAULT_PREDICTION_WINDOW;
use crate::core::error::{AnalyticsError, Result};

/// Baseline forecasting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineMode {
    /// Repeat the most recent price.
    LastValue,
    /// Extend the least-squares line through the window one step.
    #[default]
    LinearTrend,
}

/// Baseline predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselinePredictor {
    pub mode: BaselineMode,
    pub window: usize,
}

impl Default for BaselinePredictor {
    fn default() -> Self {
        Self::new(BaselineMode::default())
    }
}

impl BaselinePredictor {
    /// Create a predictor over the default 10-price window.
    pub fn new(mode: BaselineMode) -> Self {
        Self {
            mode,
            window: DEFAULT_PREDICTION_WINDOW,
        }
    }

    /// Use a custom window size.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }
}

impl Predictor for BaselinePredictor {
    fn window_size(&self) -> usize {
        self.window
    }

    fn predict(&self, window: &[f64]) -> Result<f64> {
        validate_window(window, self.window)?;
        let last = *window
            .last()
            .ok_or_else(|| AnalyticsError::empty_series("baseline window"))?;

        match self.mode {
            BaselineMode::LastValue => Ok(last),
            BaselineMode::LinearTrend => {
                if window.len() < 2 {
                    return Ok(last);
                }
                let (intercept, slope) = fit_line(window);
                Ok(intercept + slope * window.len() as f64)
            }
        }
    }

    fn name(&self) -> &str {
        match self.mode {
            BaselineMode::LastValue => "baseline_last_value",
            BaselineMode::LinearTrend => "baseline_linear_trend",
        }
    }
}

/// Ordinary least squares fit of `y = intercept + slope * t`, `t = 0..n`.
fn fit_line(data: &[f64]) -> (f64, f64) {
    let n = data.len() as f64;

    let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
    let sum_y: f64 = data.iter().sum();
    let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
    let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

    // Nonzero for n >= 2 since t is strictly increasing
    let denominator = n * sum_t2 - sum_t * sum_t;
    let slope = (n * sum_ty - sum_t * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_t) / n;
    (intercept, slope)
}
