//! Integration tests for riskcore risk metrics.

use std::sync::Once;

use approx::assert_relative_eq;
use riskcore::core::returns::compute_returns;
use riskcore::metrics::{
    beta, calculate_all_metrics, covariance, max_drawdown, sharpe_ratio, value_at_risk, variance,
    volatility,
};
use riskcore::report::format_metrics;
use riskcore::{AnalyticsConfig, AnalyticsError, ErrorKind, PriceSeries, RiskAnalyzer, RiskMetrics};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn asset_prices() -> Vec<f64> {
    vec![100.0, 102.0, 101.0, 105.0, 110.0]
}

fn market_prices() -> Vec<f64> {
    vec![100.0, 101.0, 100.0, 103.0, 107.0]
}

#[test]
fn test_returns_length_and_constant() {
    for n in 2..12 {
        let prices: Vec<f64> = (0..n).map(|i| 50.0 + (i as f64 * 0.7).sin()).collect();
        assert_eq!(compute_returns(&prices).unwrap().len(), n - 1);
    }
    assert!(compute_returns(&[3.5; 8]).unwrap().iter().all(|&r| r == 0.0));
}

#[test]
fn test_volatility_properties() {
    let returns = compute_returns(&asset_prices()).unwrap();
    assert!(volatility(&returns).unwrap() >= 0.0);
    for c in [0.0, 0.013, -0.2, 1.0 / 3.0] {
        assert_eq!(volatility(&[c; 9]).unwrap(), 0.0);
    }
}

#[test]
fn test_max_drawdown_properties() {
    assert_relative_eq!(max_drawdown(&[100.0, 50.0]).unwrap(), 0.5);
    assert_eq!(max_drawdown(&[1.0, 1.5, 2.0, 9.0]).unwrap(), 0.0);
    assert!(max_drawdown(&asset_prices()).unwrap() >= 0.0);
}

#[test]
fn test_value_at_risk_rejects_bounds() {
    let returns = compute_returns(&asset_prices()).unwrap();
    for confidence in [0.0, 1.0] {
        let err = value_at_risk(&returns, confidence).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
}

#[test]
fn test_beta_of_series_with_itself() {
    let returns = compute_returns(&market_prices()).unwrap();
    assert_relative_eq!(
        covariance(&returns, &returns).unwrap(),
        variance(&returns).unwrap(),
        epsilon = 1e-15
    );
    assert_relative_eq!(beta(&returns, &returns).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_end_to_end_scenario() {
    init_tracing();
    let metrics = calculate_all_metrics(&asset_prices(), &market_prices()).unwrap();

    assert!(metrics.beta > 0.0);
    assert_relative_eq!(metrics.max_drawdown, (102.0 - 101.0) / 102.0, epsilon = 1e-12);
    assert!(metrics.volatility > 0.0);
    assert!(metrics.sharpe_ratio.is_finite());
    assert!(metrics.alpha.is_finite());

    let formatted = format_metrics(&metrics);
    assert_eq!(formatted.get("Maximum Drawdown"), Some("0.98%"));
    assert_eq!(formatted.len(), 6);
}

#[test]
fn test_metrics_from_validated_series() {
    let asset = PriceSeries::new(asset_prices()).unwrap();
    let market = PriceSeries::new(market_prices()).unwrap();
    let metrics = RiskMetrics::from_prices(&asset, &market).unwrap();
    assert_eq!(
        metrics,
        calculate_all_metrics(&asset_prices(), &market_prices()).unwrap()
    );
}

#[test]
fn test_risk_free_rate_shifts_sharpe() {
    let low = AnalyticsConfig::default().with_risk_free_annual(0.0);
    let high = AnalyticsConfig::default().with_risk_free_annual(0.10);
    let a = RiskMetrics::from_prices_with(&asset_prices(), &market_prices(), &low).unwrap();
    let b = RiskMetrics::from_prices_with(&asset_prices(), &market_prices(), &high).unwrap();

    assert!(a.sharpe_ratio > b.sharpe_ratio);
    assert_eq!(a.beta, b.beta);
    assert_eq!(a.value_at_risk, b.value_at_risk);
}

#[test]
fn test_failures_propagate_without_partial_results() {
    let err = calculate_all_metrics(&[100.0, -1.0, 101.0], &market_prices()[..3]).unwrap_err();
    assert_eq!(err, AnalyticsError::invalid_price(1, -1.0));

    let err = calculate_all_metrics(&[100.0, 100.0, 100.0], &[100.0, 101.0, 102.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateVolatility);
}

#[test]
fn test_config_from_json() {
    let config: AnalyticsConfig =
        serde_json::from_str(r#"{"risk_free_annual": 0.05, "rsi_period": 7}"#).unwrap();
    assert_eq!(config.rsi_period, 7);
    assert_eq!(config.moving_average_period, 20);
    assert_relative_eq!(config.risk_free_annual, 0.05);

    let analyzer = RiskAnalyzer::new(config).unwrap();
    assert_eq!(analyzer.config().var_confidence, 0.95);
}

#[test]
fn test_price_series_rejects_in_deserialization() {
    assert!(serde_json::from_str::<PriceSeries>("[1.0, 2.0]").is_ok());
    assert!(serde_json::from_str::<PriceSeries>("[1.0, 0.0]").is_err());
}

#[test]
fn test_non_finite_returns_never_yield_nan() {
    let returns = [0.01, f64::NAN, 0.02];
    for result in [
        volatility(&returns),
        sharpe_ratio(&returns),
        value_at_risk(&returns, 0.95),
        beta(&[0.01, 0.0, 0.02], &returns),
    ] {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidParameter);
    }
}
