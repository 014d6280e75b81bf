//! Technical indicators for riskcore.
//!
//! Indicators are pure functions over price slices that return only the
//! points with a full lookback window; there is no NaN warmup padding.

pub mod momentum;
pub mod trend;

pub use momentum::{rsi, rsi_default, RSI_ZERO_LOSS};
pub use trend::{moving_average, sma};
