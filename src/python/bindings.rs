//! PyO3 function bindings for riskcore.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::core::types::RiskMetrics;
use crate::indicators;
use crate::metrics;
use crate::predictor::{BaselineMode, BaselinePredictor, LearnedModelPredictor, Predictor};
use crate::report;

use super::numpy_bridge::*;

/// Python-exposed risk metrics record.
#[pyclass(name = "RiskMetrics")]
#[derive(Debug, Clone)]
pub struct PyRiskMetrics {
    #[pyo3(get)]
    pub sharpe_ratio: f64,
    #[pyo3(get)]
    pub beta: f64,
    #[pyo3(get)]
    pub alpha: f64,
    #[pyo3(get)]
    pub value_at_risk: f64,
    #[pyo3(get)]
    pub max_drawdown: f64,
    #[pyo3(get)]
    pub volatility: f64,
}

impl From<RiskMetrics> for PyRiskMetrics {
    fn from(m: RiskMetrics) -> Self {
        Self {
            sharpe_ratio: m.sharpe_ratio,
            beta: m.beta,
            alpha: m.alpha,
            value_at_risk: m.value_at_risk,
            max_drawdown: m.max_drawdown,
            volatility: m.volatility,
        }
    }
}

impl From<&PyRiskMetrics> for RiskMetrics {
    fn from(m: &PyRiskMetrics) -> Self {
        Self {
            sharpe_ratio: m.sharpe_ratio,
            beta: m.beta,
            alpha: m.alpha,
            value_at_risk: m.value_at_risk,
            max_drawdown: m.max_drawdown,
            volatility: m.volatility,
        }
    }
}

#[pymethods]
impl PyRiskMetrics {
    fn __repr__(&self) -> String {
        format!(
            "RiskMetrics(sharpe_ratio={:.4}, beta={:.4}, alpha={:.6}, value_at_risk={:.6}, max_drawdown={:.6}, volatility={:.6})",
            self.sharpe_ratio,
            self.beta,
            self.alpha,
            self.value_at_risk,
            self.max_drawdown,
            self.volatility
        )
    }
}

/// Risk metrics for an asset against a market benchmark.
#[pyfunction]
#[pyo3(signature = (asset_prices, market_prices, risk_free_annual=0.02, confidence=0.95))]
pub fn calculate_all_metrics(
    asset_prices: PyReadonlyArray1<f64>,
    market_prices: PyReadonlyArray1<f64>,
    risk_free_annual: f64,
    confidence: f64,
) -> PyResult<PyRiskMetrics> {
    let asset = numpy_to_vec_f64(asset_prices);
    let market = numpy_to_vec_f64(market_prices);
    let config = crate::core::AnalyticsConfig::default()
        .with_risk_free_annual(risk_free_annual)
        .with_var_confidence(confidence);
    config.validate()?;
    let metrics = metrics::calculate_all_metrics_with(&asset, &market, &config)?;
    Ok(metrics.into())
}

/// Simple Moving Average.
#[pyfunction]
#[pyo3(signature = (data, period=20))]
pub fn moving_average<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let vec = numpy_to_vec_f64(data);
    let result = indicators::moving_average(&vec, period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Relative Strength Index.
#[pyfunction]
#[pyo3(signature = (data, period=14))]
pub fn rsi<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let vec = numpy_to_vec_f64(data);
    let result = indicators::rsi(&vec, period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Next-price forecast from a 10-price window.
///
/// `model` is one of "linear_trend", "last_value", "learned".
#[pyfunction]
#[pyo3(signature = (window, model="linear_trend"))]
pub fn predict(py: Python<'_>, window: PyReadonlyArray1<f64>, model: &str) -> PyResult<f64> {
    let vec = numpy_to_vec_f64(window);
    let predictor: Box<dyn Predictor> = match model {
        "linear_trend" => Box::new(BaselinePredictor::new(BaselineMode::LinearTrend)),
        "last_value" => Box::new(BaselinePredictor::new(BaselineMode::LastValue)),
        "learned" => Box::new(LearnedModelPredictor::default()),
        other => {
            return Err(pyo3::exceptions::PyValueError::new_err(format!(
                "unknown model '{other}'"
            )))
        }
    };
    let forecast = py.allow_threads(|| predictor.predict(&vec))?;
    Ok(forecast)
}

/// Labelled display strings for a metrics record, in display order.
#[pyfunction]
#[pyo3(signature = (metrics, confidence=0.95))]
pub fn format_metrics(metrics: &PyRiskMetrics, confidence: f64) -> Vec<(String, String)> {
    report::format_with_confidence(&RiskMetrics::from(metrics), confidence).into_vec()
}
