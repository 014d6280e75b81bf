//! Statistical moments and risk metrics.

pub mod drawdown;
pub mod moments;
pub mod risk;

pub use drawdown::{drawdown_curve, max_drawdown, DrawdownTracker};
pub use moments::{correlation, covariance, mean, sample_variance, stddev, variance};
pub use risk::{
    alpha, alpha_with, beta, calculate_all_metrics, calculate_all_metrics_with, sharpe_ratio,
    sharpe_ratio_with, value_at_risk, volatility,
};
