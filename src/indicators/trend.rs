//! Trend indicators: simple moving average.

use crate::core::config::DEFAULT_MOVING_AVERAGE_PERIOD;
use crate::core::error::{AnalyticsError, Result};
use crate::core::types::validate_finite;

/// Simple Moving Average over the default 20-period window.
pub fn sma(data: &[f64]) -> Result<Vec<f64>> {
    moving_average(data, DEFAULT_MOVING_AVERAGE_PERIOD)
}

/// Simple Moving Average.
///
/// # Arguments
/// * `data` - Price data, oldest first
/// * `period` - Lookback period
///
/// # Returns
/// One value per full window: `data.len() - period + 1` means, the first
/// covering `data[..period]`. No warmup padding. Any NaN or infinite input
/// is rejected with [`AnalyticsError::InvalidPrice`].
pub fn moving_average(data: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(AnalyticsError::invalid_parameter(
            "moving average period must be > 0",
        ));
    }
    let n = data.len();
    if n < period {
        return Err(AnalyticsError::insufficient_data(period, n));
    }
    validate_finite(data)?;

    let mut result = Vec::with_capacity(n - period + 1);

    let mut sum = WindowSum::default();
    for &x in &data[..period] {
        sum.add(x);
    }
    result.push(sum.value() / period as f64);

    // Sliding window for remaining values
    for i in period..n {
        sum.add(-data[i - period]);
        sum.add(data[i]);
        result.push(sum.value() / period as f64);
    }

    Ok(result)
}

/// Running sum with Neumaier compensation.
///
/// Removing a large value that left the window would otherwise wipe out the
/// low-order bits of the smaller values still in it.
#[derive(Debug, Default)]
struct WindowSum {
    sum: f64,
    comp: f64,
}

impl WindowSum {
    #[inline]
    fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.comp += (self.sum - t) + x;
        } else {
            self.comp += (x - t) + self.sum;
        }
        self.sum = t;
    }

    #[inline]
    fn value(&self) -> f64 {
        self.sum + self.comp
    }
}
