//! Shared numerical helpers for the scalar solvers.

/// Numerical threshold for detecting a vanishing derivative or secant slope.
pub const SINGULAR_THRESHOLD: f64 = 1e-14;

/// Default relative step for finite difference approximations.
pub const DEFAULT_FINITE_DIFF_EPS: f64 = 1e-6;

/// Central finite-difference derivative of a scalar function.
///
/// The step is scaled by `max(|x|, 1)` so that it stays meaningful far from
/// the origin.
#[inline]
pub fn central_difference<F>(f: &F, x: f64, eps: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = eps * x.abs().max(1.0);
    (f(x + h) - f(x - h)) / (2.0 * h)
}
