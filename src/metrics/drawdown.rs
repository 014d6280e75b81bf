//! Peak-to-trough drawdown over price series.

use crate::core::error::{AnalyticsError, Result};
use crate::core::types::validate_prices;

/// Drawdown tracker for incremental price updates.
///
/// Drawdowns are fractions of the running peak (0.25 = 25% below peak).
#[derive(Debug, Clone, Default)]
pub struct DrawdownTracker {
    /// Highest price seen so far.
    peak: f64,
    /// Drawdown at the latest update.
    current_drawdown: f64,
    /// Maximum drawdown seen.
    max_drawdown: f64,
    /// Updates since the last peak.
    current_duration: usize,
    /// Longest run below a peak.
    max_duration: usize,
    /// Index of the update that set the maximum drawdown.
    max_drawdown_idx: usize,
    /// Total count of updates.
    count: usize,
}

impl DrawdownTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update with the next price.
    pub fn update(&mut self, price: f64) {
        self.count += 1;

        if self.count == 1 || price > self.peak {
            self.peak = price;
            self.current_drawdown = 0.0;
            self.current_duration = 0;
            return;
        }

        self.current_drawdown = (self.peak - price) / self.peak;
        self.current_duration += 1;

        if self.current_drawdown > self.max_drawdown {
            self.max_drawdown = self.current_drawdown;
            self.max_drawdown_idx = self.count - 1;
        }
        if self.current_duration > self.max_duration {
            self.max_duration = self.current_duration;
        }
    }

    /// Maximum drawdown as a fraction.
    #[inline]
    pub fn max_drawdown(&self) -> f64 {
        self.max_drawdown
    }

    /// Drawdown at the latest update.
    #[inline]
    pub fn current_drawdown(&self) -> f64 {
        self.current_drawdown
    }

    /// Get current peak value.
    #[inline]
    pub fn peak(&self) -> f64 {
        self.peak
    }

    /// Longest stretch of updates spent below a peak.
    #[inline]
    pub fn max_duration(&self) -> usize {
        self.max_duration
    }

    /// Zero-based update index where the maximum drawdown occurred.
    #[inline]
    pub fn max_drawdown_idx(&self) -> usize {
        self.max_drawdown_idx
    }

    /// Check if currently below the peak.
    #[inline]
    pub fn in_drawdown(&self) -> bool {
        self.current_drawdown > 0.0
    }

    /// Reset the tracker.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Fractional drawdown from the running peak at every step.
pub fn drawdown_curve(prices: &[f64]) -> Result<Vec<f64>> {
    if prices.is_empty() {
        return Err(AnalyticsError::empty_series("drawdown_curve"));
    }
    validate_prices(prices)?;

    let mut peak = prices[0];
    Ok(prices
        .iter()
        .map(|&price| {
            if price > peak {
                peak = price;
            }
            (peak - price) / peak
        })
        .collect())
}

/// Largest peak-to-trough decline as a fraction of the peak.
///
/// Non-negative; zero for a series that never falls below its running peak.
pub fn max_drawdown(prices: &[f64]) -> Result<f64> {
    if prices.is_empty() {
        return Err(AnalyticsError::empty_series("max_drawdown"));
    }
    validate_prices(prices)?;

    let mut tracker = DrawdownTracker::new();
    for &price in prices {
        tracker.update(price);
    }
    Ok(tracker.max_drawdown())
}
