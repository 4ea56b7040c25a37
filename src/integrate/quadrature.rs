//! Composite trapezoidal rule over sampled data.

use super::error::{IntegrateError, IntegrateResult};

/// Trapezoidal rule integration of sampled values.
///
/// Computes ∫y dx as `Σ 0.5 * (x[i+1] - x[i]) * (y[i] + y[i+1])`.
/// The abscissae need not be evenly spaced.
///
/// # Errors
///
/// * `ShapeMismatch` if `x` and `y` differ in length
/// * `InsufficientData` if fewer than 2 points are given
pub fn trapezoid(y: &[f64], x: &[f64]) -> IntegrateResult<f64> {
    if x.len() != y.len() {
        return Err(IntegrateError::ShapeMismatch {
            expected: y.len(),
            actual: x.len(),
            context: "trapezoid".to_string(),
        });
    }
    if y.len() < 2 {
        return Err(IntegrateError::InsufficientData {
            required: 2,
            actual: y.len(),
            context: "trapezoid".to_string(),
        });
    }

    Ok(x.windows(2)
        .zip(y.windows(2))
        .map(|(xw, yw)| 0.5 * (xw[1] - xw[0]) * (yw[0] + yw[1]))
        .sum())
}

/// Trapezoidal rule with uniform spacing.
///
/// Uses the formula: integral = dx * (sum(y) - 0.5*(y[0] + y[n-1]))
pub fn trapezoid_uniform(y: &[f64], dx: f64) -> IntegrateResult<f64> {
    if y.len() < 2 {
        return Err(IntegrateError::InsufficientData {
            required: 2,
            actual: y.len(),
            context: "trapezoid_uniform".to_string(),
        });
    }
    if !dx.is_finite() {
        return Err(IntegrateError::InvalidParameter {
            parameter: "dx".to_string(),
            message: format!("spacing must be finite, got {}", dx),
        });
    }

    let total: f64 = y.iter().sum();
    Ok(dx * (total - 0.5 * (y[0] + y[y.len() - 1])))
}
