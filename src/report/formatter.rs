//! Human-readable rendering of [`RiskMetrics`].

use std::fmt;

use serde::Serialize;

use crate::core::config::DEFAULT_VAR_CONFIDENCE;
use crate::core::types::RiskMetrics;

pub const SHARPE_RATIO_LABEL: &str = "Sharpe Ratio";
pub const BETA_LABEL: &str = "Beta";
pub const ALPHA_LABEL: &str = "Alpha";
pub const MAX_DRAWDOWN_LABEL: &str = "Maximum Drawdown";
pub const VOLATILITY_LABEL: &str = "Volatility";

/// Ordered label/value pairs ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMetrics {
    entries: Vec<(String, String)>,
}

impl FormattedMetrics {
    /// Display string for `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// Labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Get the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume into the label/value pairs.
    pub fn into_vec(self) -> Vec<(String, String)> {
        self.entries
    }
}

impl fmt::Display for FormattedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

/// Format metrics with the 95% VaR label.
pub fn format_metrics(metrics: &RiskMetrics) -> FormattedMetrics {
    format_with_confidence(metrics, DEFAULT_VAR_CONFIDENCE)
}

/// Format metrics, labelling VaR with the confidence it was computed at.
///
/// Ratios print with two decimals; alpha, VaR, drawdown and volatility print
/// as percentages with two decimals.
pub fn format_with_confidence(metrics: &RiskMetrics, confidence: f64) -> FormattedMetrics {
    let entries = vec![
        (SHARPE_RATIO_LABEL.to_string(), ratio(metrics.sharpe_ratio)),
        (BETA_LABEL.to_string(), ratio(metrics.beta)),
        (ALPHA_LABEL.to_string(), percent(metrics.alpha)),
        (value_at_risk_label(confidence), percent(metrics.value_at_risk)),
        (MAX_DRAWDOWN_LABEL.to_string(), percent(metrics.max_drawdown)),
        (VOLATILITY_LABEL.to_string(), percent(metrics.volatility)),
    ];
    FormattedMetrics { entries }
}

/// `"Value at Risk (95%)"` style label.
pub fn value_at_risk_label(confidence: f64) -> String {
    let pct = format!("{:.2}", confidence * 100.0);
    let pct = pct.trim_end_matches('0').trim_end_matches('.');
    format!("Value at Risk ({pct}%)")
}

fn ratio(value: f64) -> String {
    format!("{:.2}", normalize_zero(value))
}

fn percent(value: f64) -> String {
    format!("{:.2}%", normalize_zero(value * 100.0))
}

// Keeps "-0.00" out of the output.
#[inline]
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 || (value.abs() < 0.005 && value.is_sign_negative()) {
        0.0
    } else {
        value
    }
}
