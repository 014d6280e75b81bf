//! Async execution of predictors on tokio's blocking pool.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::Predictor;
use crate::core::error::{AnalyticsError, Result};

/// Run `predictor` off the async executor and await its forecast.
///
/// Dropping the returned future discards the result; the predictor holds no
/// state that needs rolling back.
pub async fn predict_async<P>(predictor: Arc<P>, window: Vec<f64>) -> Result<f64>
where
    P: Predictor + ?Sized + 'static,
{
    let forecast = tokio::task::spawn_blocking(move || {
        let result = predictor.predict(&window);
        if let Ok(value) = &result {
            debug!(
                predictor = predictor.name(),
                window = window.len(),
                forecast = *value,
                "price forecast"
            );
        }
        result
    })
    .await
    .map_err(|e| AnalyticsError::prediction(format!("predictor task failed: {e}")))??;

    Ok(forecast)
}

/// [`predict_async`] bounded by a caller-supplied deadline.
pub async fn predict_with_deadline<P>(
    predictor: Arc<P>,
    window: Vec<f64>,
    deadline: Duration,
) -> Result<f64>
where
    P: Predictor + ?Sized + 'static,
{
    tokio::time::timeout(deadline, predict_async(predictor, window))
        .await
        .map_err(|_| AnalyticsError::prediction(format!("no forecast within {deadline:?}")))?
}
