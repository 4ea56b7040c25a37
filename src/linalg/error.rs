//! Error types for dense linear solves.

use std::fmt;

/// Result type for linear algebra operations.
pub type LinalgResult<T> = Result<T, LinalgError>;

/// Errors that can occur while building or solving a linear system.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// The coefficient matrix is empty or not square.
    NotSquare { rows: usize, cols: usize },

    /// Vector length does not match the matrix dimension.
    DimensionMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// An input entry is NaN or infinite.
    NonFinite { context: String },

    /// The solver produced a non-finite solution.
    Singular { context: String },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, cols } => {
                write!(
                    f,
                    "Coefficient matrix must be square and non-empty, got {}x{}",
                    rows, cols
                )
            }
            Self::DimensionMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Self::NonFinite { context } => {
                write!(f, "Non-finite value in {}", context)
            }
            Self::Singular { context } => {
                write!(f, "Singular system in {}: solution is not finite", context)
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for LinalgError {}

impl From<numr::error::Error> for LinalgError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}
