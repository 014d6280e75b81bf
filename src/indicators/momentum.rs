//! Momentum indicators: RSI.

use crate::core::config::DEFAULT_RSI_PERIOD;
use crate::core::error::{AnalyticsError, Result};
use crate::core::types::validate_finite;

/// RSI value when the smoothed average loss is zero.
pub const RSI_ZERO_LOSS: f64 = 100.0;

/// Relative Strength Index over the default 14-period lookback.
pub fn rsi_default(data: &[f64]) -> Result<Vec<f64>> {
    rsi(data, DEFAULT_RSI_PERIOD)
}

/// Relative Strength Index (RSI) with Wilder's smoothing.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `period` - Lookback period (default: 14)
///
/// # Returns
/// `data.len() - period` values on a 0-100 scale. The first value uses the
/// simple mean of the first `period` gains and losses; later values smooth
/// with `avg = (avg * (period - 1) + x) / period`. A zero average loss
/// reports [`RSI_ZERO_LOSS`]. NaN or infinite prices are rejected with
/// [`AnalyticsError::InvalidPrice`].
pub fn rsi(data: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(AnalyticsError::invalid_parameter("RSI period must be > 0"));
    }
    let n = data.len();
    if n <= period {
        return Err(AnalyticsError::insufficient_data(period + 1, n));
    }
    validate_finite(data)?;

    // Calculate price changes
    let (gains, losses): (Vec<f64>, Vec<f64>) = data
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    let p = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / p;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / p;

    let mut result = Vec::with_capacity(n - period);
    result.push(rsi_value(avg_gain, avg_loss));

    for i in period..gains.len() {
        avg_gain = (avg_gain * (p - 1.0) + gains[i]) / p;
        avg_loss = (avg_loss * (p - 1.0) + losses[i]) / p;
        result.push(rsi_value(avg_gain, avg_loss));
    }

    Ok(result)
}

#[inline]
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        RSI_ZERO_LOSS
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
