//! Error types for numerical integration.

use std::fmt;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during integration.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrateError {
    /// Sample and abscissa arrays have different lengths.
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Too few samples for the requested rule.
    InsufficientData {
        required: usize,
        actual: usize,
        context: String,
    },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },
}

impl fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Shape mismatch in {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Self::InsufficientData {
                required,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Insufficient data in {}: need {} points, got {}",
                    context, required, actual
                )
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
        }
    }
}

impl std::error::Error for IntegrateError {}
