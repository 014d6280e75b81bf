//! Short-horizon price prediction.
//!
//! A [`Predictor`] maps a fixed-size trailing window of prices to a single
//! forecast of the next price. Implementations hold no state between calls,
//! so one instance can be shared across threads and tasks.

pub mod baseline;
pub mod learned;
pub mod runtime;

use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_PREDICTION_WINDOW;
use crate::core::error::{AnalyticsError, Result};
use crate::core::types::validate_prices;

pub use baseline::{BaselineMode, BaselinePredictor};
pub use learned::{ArModel, LearnedModelPredictor};
pub use runtime::{predict_async, predict_with_deadline};

/// Point forecast from a trailing price window.
pub trait Predictor: Send + Sync {
    /// Number of prices `predict` expects.
    fn window_size(&self) -> usize {
        DEFAULT_PREDICTION_WINDOW
    }

    /// Forecast the price following the last element of `window`.
    fn predict(&self, window: &[f64]) -> Result<f64>;

    /// Short identifier for logs.
    fn name(&self) -> &str;
}

/// Check a window has exactly `size` positive, finite prices.
pub fn validate_window(window: &[f64], size: usize) -> Result<()> {
    if window.len() != size {
        return Err(AnalyticsError::insufficient_data(size, window.len()));
    }
    validate_prices(window)
}

/// Tagged set of built-in predictors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricePredictor {
    Baseline(BaselinePredictor),
    LearnedModel(LearnedModelPredictor),
}

impl Default for PricePredictor {
    fn default() -> Self {
        Self::Baseline(BaselinePredictor::default())
    }
}

impl Predictor for PricePredictor {
    fn window_size(&self) -> usize {
        match self {
            Self::Baseline(p) => p.window_size(),
            Self::LearnedModel(p) => p.window_size(),
        }
    }

    fn predict(&self, window: &[f64]) -> Result<f64> {
        match self {
            Self::Baseline(p) => p.predict(window),
            Self::LearnedModel(p) => p.predict(window),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Baseline(p) => p.name(),
            Self::LearnedModel(p) => p.name(),
        }
    }
}

/// Forecast the next price from the last 10 prices with the default
/// baseline predictor.
pub fn predict(window: &[f64]) -> Result<f64> {
    PricePredictor::default().predict(window)
}
