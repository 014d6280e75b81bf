//! Integration tests for riskcore predictors.

use std::sync::Arc;
use std::time::Duration;

use approx::assert_relative_eq;
use riskcore::predictor::{
    predict_async, predict_with_deadline, BaselineMode, BaselinePredictor, LearnedModelPredictor,
    PricePredictor, Predictor,
};
use riskcore::{AnalyticsError, ErrorKind, RiskAnalyzer};

fn trending_window() -> Vec<f64> {
    (0..10).map(|i| 100.0 + 1.5 * i as f64).collect()
}

#[test]
fn test_predictor_variants() {
    let window = trending_window();
    let predictors = vec![
        PricePredictor::Baseline(BaselinePredictor::new(BaselineMode::LastValue)),
        PricePredictor::Baseline(BaselinePredictor::new(BaselineMode::LinearTrend)),
        PricePredictor::LearnedModel(LearnedModelPredictor::default()),
    ];

    let forecasts: Vec<f64> = predictors
        .iter()
        .map(|p| p.predict(&window).unwrap())
        .collect();

    assert_eq!(forecasts[0], 113.5);
    assert_relative_eq!(forecasts[1], 115.0, epsilon = 1e-9);
    assert!(forecasts[2] > 113.5 && forecasts[2] < 116.0);
}

#[test]
fn test_window_size_enforced() {
    let predictor = PricePredictor::default();
    for len in [0, 1, 9, 11] {
        let err = predictor.predict(&vec![100.0; len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }
}

#[test]
fn test_predictor_from_json() {
    let predictor: PricePredictor =
        serde_json::from_str(r#"{"kind": "learned_model", "window": 10, "ridge": 0.001}"#)
            .unwrap();
    assert_eq!(predictor.name(), "learned_ar1");

    let predictor: PricePredictor =
        serde_json::from_str(r#"{"kind": "baseline", "mode": "last_value", "window": 10}"#)
            .unwrap();
    assert_eq!(predictor.predict(&trending_window()).unwrap(), 113.5);
}

#[test]
fn test_analyzer_forecast_uses_trailing_window() {
    let analyzer = RiskAnalyzer::default();
    let mut prices = vec![500.0; 30];
    prices.extend(trending_window());

    let forecast = analyzer
        .forecast(&PricePredictor::default(), &prices)
        .unwrap();
    assert_relative_eq!(forecast, 115.0, epsilon = 1e-9);
}

#[tokio::test]
async fn test_concurrent_predictions() {
    let predictor: Arc<dyn Predictor> = Arc::new(LearnedModelPredictor::default());
    let window = trending_window();

    let handles: Vec<_> = (0..8)
        .map(|_| tokio::spawn(predict_async(Arc::clone(&predictor), window.clone())))
        .collect();

    let mut forecasts = Vec::new();
    for handle in handles {
        forecasts.push(handle.await.unwrap().unwrap());
    }
    assert!(forecasts.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_async_error_propagates() {
    let predictor = Arc::new(PricePredictor::default());
    let result = predict_with_deadline(predictor, vec![-1.0; 10], Duration::from_secs(1)).await;
    assert!(matches!(
        result,
        Err(AnalyticsError::InvalidPrice { index: 0, .. })
    ));
}
