//! riskcore - risk and performance analytics for price series.
//!
//! This crate provides:
//! - Return series and statistical moments (population convention)
//! - Risk metrics (volatility, Sharpe, beta, alpha, VaR, max drawdown)
//! - Technical indicators (SMA, RSI)
//! - Pluggable short-horizon price predictors with async execution
//! - Display formatting of metric records
//!
//! Every computation is a pure function of its inputs and returns a typed
//! [`AnalyticsError`] instead of propagating `NaN` or `inf`.

// Suppress warning from PyO3 macro expansion (fixed in newer PyO3 versions)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod analyzer;
pub mod core;
pub mod indicators;
pub mod metrics;
pub mod predictor;
#[cfg(feature = "python")]
pub mod python;
pub mod report;

pub use analyzer::RiskAnalyzer;
pub use crate::core::{
    compute_returns, AnalyticsConfig, AnalyticsError, ErrorKind, PriceSeries, Result, RiskMetrics,
};
pub use indicators::{moving_average, rsi};
pub use metrics::calculate_all_metrics;
pub use predictor::{predict, PricePredictor, Predictor};
pub use report::{format_metrics, FormattedMetrics};

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn _riskcore(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<python::bindings::PyRiskMetrics>()?;

    m.add_function(wrap_pyfunction!(python::bindings::calculate_all_metrics, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::moving_average, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::rsi, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::predict, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::format_metrics, m)?)?;

    Ok(())
}
