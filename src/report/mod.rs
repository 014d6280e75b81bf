//! Display formatting for computed metrics.

pub mod formatter;

pub use formatter::{format_metrics, format_with_confidence, value_at_risk_label, FormattedMetrics};
