//! Core types and utilities for riskcore.

pub mod config;
pub mod error;
pub mod returns;
pub mod types;

pub use config::AnalyticsConfig;
pub use error::{AnalyticsError, ErrorKind, Result};
pub use returns::{compute_returns, log_returns};
pub use types::*;
