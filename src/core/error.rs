//! Error types for riskcore.

use thiserror::Error;

/// Result type alias for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Coarse classification of an [`AnalyticsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptySeries,
    InsufficientData,
    LengthMismatch,
    DegenerateVolatility,
    InvalidParameter,
    InvalidPrice,
    Prediction,
}

/// Error types for the analytics core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A zero-length sequence where at least one element is required.
    #[error("Empty series provided for {context}")]
    EmptySeries { context: String },

    /// Sequence shorter than the operation requires.
    #[error("Insufficient data: need at least {required} elements, got {available}")]
    InsufficientData { required: usize, available: usize },

    /// Two sequences expected to be aligned differ in length.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Zero volatility or variance in a ratio denominator.
    #[error("Degenerate volatility in {context}: denominator is zero")]
    DegenerateVolatility { context: String },

    /// Parameter outside its valid domain.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Non-positive or non-finite price.
    #[error("Invalid price {value} at index {index}: prices must be positive and finite")]
    InvalidPrice { index: usize, value: f64 },

    /// Predictor task failed or exceeded its deadline.
    #[error("Prediction failed: {message}")]
    Prediction { message: String },
}

impl AnalyticsError {
    /// Create an empty series error.
    pub fn empty_series(context: impl Into<String>) -> Self {
        Self::EmptySeries {
            context: context.into(),
        }
    }

    /// Create an insufficient data error.
    pub fn insufficient_data(required: usize, available: usize) -> Self {
        Self::InsufficientData {
            required,
            available,
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create a degenerate volatility error.
    pub fn degenerate_volatility(context: impl Into<String>) -> Self {
        Self::DegenerateVolatility {
            context: context.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an invalid price error.
    pub fn invalid_price(index: usize, value: f64) -> Self {
        Self::InvalidPrice { index, value }
    }

    /// Create a prediction error.
    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySeries { .. } => ErrorKind::EmptySeries,
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::DegenerateVolatility { .. } => ErrorKind::DegenerateVolatility,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::InvalidPrice { .. } => ErrorKind::InvalidPrice,
            Self::Prediction { .. } => ErrorKind::Prediction,
        }
    }
}

#[cfg(feature = "python")]
impl From<AnalyticsError> for pyo3::PyErr {
    fn from(err: AnalyticsError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AnalyticsError::insufficient_data(2, 1);
        assert_eq!(
            err.to_string(),
            "Insufficient data: need at least 2 elements, got 1"
        );

        let err = AnalyticsError::invalid_price(3, -1.0);
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            AnalyticsError::length_mismatch(3, 4).kind(),
            ErrorKind::LengthMismatch
        );
        assert_eq!(
            AnalyticsError::degenerate_volatility("beta").kind(),
            ErrorKind::DegenerateVolatility
        );
    }
}
