//! Local root finding algorithms for scalar functions.

use super::{RootMethod, RootResult, ScalarOptions};
use crate::optimize::error::{OptimizeError, OptimizeResult};
use crate::optimize::utils::{DEFAULT_FINITE_DIFF_EPS, SINGULAR_THRESHOLD, central_difference};

/// Relative perturbation used to derive the second secant point from a seed.
const SECANT_PERTURBATION: f64 = 1e-4;

/// Outcome of a local solve started from one seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedOutcome {
    /// Initial guess handed to the solver
    pub seed: f64,
    /// Converged root, or the reason the solver gave up
    pub result: OptimizeResult<RootResult>,
}

impl SeedOutcome {
    /// The converged root, if any.
    pub fn root(&self) -> Option<f64> {
        self.result.as_ref().ok().map(|r| r.root)
    }
}

/// Newton's method for root finding.
///
/// # Arguments
/// * `f` - Function to find root of
/// * `df` - Derivative of f
/// * `x0` - Initial guess
/// * `options` - Solver options
///
/// # Errors
/// * `DidNotConverge` if iterations exceed max_iter
/// * `NumericalError` if the derivative is too close to zero or an iterate is not finite
///
/// # Note
/// Newton's method has quadratic convergence but may diverge if x0 is far from root.
pub fn newton<F, DF>(f: F, df: DF, x0: f64, options: &ScalarOptions) -> OptimizeResult<RootResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = x0;

    for iter in 0..options.max_iter {
        let fx = f(x);
        if fx == 0.0 {
            return Ok(RootResult {
                root: x,
                function_value: fx,
                iterations: iter,
                bracket_width: 0.0,
            });
        }

        let dfx = df(x);
        if dfx.is_nan() || dfx.abs() < SINGULAR_THRESHOLD {
            return Err(OptimizeError::NumericalError {
                message: format!("derivative too close to zero at x = {}", x),
            });
        }

        let x_new = x - fx / dfx;
        if !x_new.is_finite() {
            return Err(OptimizeError::NumericalError {
                message: format!("newton iterate diverged from x = {}", x),
            });
        }
        let dx = (x_new - x).abs();

        if dx < options.tol || dx / x.abs().max(1.0) < options.rtol {
            return Ok(RootResult {
                root: x_new,
                function_value: f(x_new),
                iterations: iter + 1,
                bracket_width: dx,
            });
        }

        x = x_new;
    }

    Err(OptimizeError::DidNotConverge {
        iterations: options.max_iter,
        tolerance: options.tol,
        context: "newton".to_string(),
    })
}

/// Secant method for root finding.
///
/// # Arguments
/// * `f` - Function to find root of
/// * `x0` - First initial guess
/// * `x1` - Second initial guess
/// * `options` - Solver options
///
/// # Errors
/// * `DidNotConverge` if iterations exceed max_iter
/// * `NumericalError` if the secant slope vanishes or an iterate is not finite
///
/// # Note
/// Secant method has superlinear convergence (~1.618) and doesn't require derivatives.
pub fn secant<F>(f: F, x0: f64, x1: f64, options: &ScalarOptions) -> OptimizeResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);

    for iter in 0..options.max_iter {
        if f_curr == 0.0 {
            return Ok(RootResult {
                root: x_curr,
                function_value: f_curr,
                iterations: iter,
                bracket_width: (x_curr - x_prev).abs(),
            });
        }

        let denom = f_curr - f_prev;
        if denom.is_nan() || denom.abs() < SINGULAR_THRESHOLD {
            return Err(OptimizeError::NumericalError {
                message: format!("secant slope too close to zero at x = {}", x_curr),
            });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        if !x_next.is_finite() {
            return Err(OptimizeError::NumericalError {
                message: format!("secant iterate diverged from x = {}", x_curr),
            });
        }
        let dx = (x_next - x_curr).abs();

        if dx < options.tol || dx / x_curr.abs().max(1.0) < options.rtol {
            return Ok(RootResult {
                root: x_next,
                function_value: f(x_next),
                iterations: iter + 1,
                bracket_width: dx,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr);
    }

    Err(OptimizeError::DidNotConverge {
        iterations: options.max_iter,
        tolerance: options.tol,
        context: "secant".to_string(),
    })
}

/// Refine a single seed into a root with the chosen local method.
///
/// The secant method uses `x0 * (1 + 1e-4) ± 1e-4` as its second point, the
/// sign following the sign of the seed. Newton's method differentiates `f`
/// numerically.
pub fn find_root<F>(
    f: F,
    x0: f64,
    method: RootMethod,
    options: &ScalarOptions,
) -> OptimizeResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(OptimizeError::InvalidParameter {
            parameter: "x0".to_string(),
            message: format!("initial guess must be finite, got {}", x0),
        });
    }

    match method {
        RootMethod::Secant => {
            let offset = if x0 >= 0.0 {
                SECANT_PERTURBATION
            } else {
                -SECANT_PERTURBATION
            };
            let x1 = x0 * (1.0 + SECANT_PERTURBATION) + offset;
            secant(&f, x0, x1, options)
        }
        RootMethod::Newton => newton(
            &f,
            |x| central_difference(&f, x, DEFAULT_FINITE_DIFF_EPS),
            x0,
            options,
        ),
    }
}

/// Run one independent local solve per seed.
///
/// Outcomes are returned in seed order. Seeds frequently converge to the same
/// root; no deduplication is applied.
pub fn roots_from_seeds<F>(
    f: F,
    seeds: &[f64],
    method: RootMethod,
    options: &ScalarOptions,
) -> Vec<SeedOutcome>
where
    F: Fn(f64) -> f64,
{
    seeds
        .iter()
        .map(|&seed| SeedOutcome {
            seed,
            result: find_root(&f, seed, method, options),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newton_simple() {
        let result = newton(|x| x * x - 4.0, |x| 2.0 * x, 3.0, &ScalarOptions::default())
            .expect("newton failed");
        assert!((result.root - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_newton_flat_derivative() {
        let result = newton(|x| x * x + 1.0, |x| 2.0 * x, 0.0, &ScalarOptions::default());
        assert!(matches!(result, Err(OptimizeError::NumericalError { .. })));
    }

    #[test]
    fn test_nan_slope_is_an_error() {
        let options = ScalarOptions::default();
        let result = newton(|x| x - 1.0, |_| f64::NAN, 0.0, &options);
        assert!(matches!(result, Err(OptimizeError::NumericalError { .. })));

        let result = secant(|_| f64::NAN, 0.0, 1.0, &options);
        assert!(matches!(result, Err(OptimizeError::NumericalError { .. })));
    }

    #[test]
    fn test_newton_exact_seed() {
        let result =
            newton(|x| x - 1.0, |_| 1.0, 1.0, &ScalarOptions::default()).expect("newton failed");
        assert_eq!(result.root, 1.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_secant_simple() {
        let result =
            secant(|x| x * x - 4.0, 1.0, 3.0, &ScalarOptions::default()).expect("secant failed");
        assert!((result.root - 2.0).abs() < 1e-10);
        assert!(result.function_value.abs() < 1e-9);
    }

    #[test]
    fn test_secant_no_real_root() {
        let options = ScalarOptions {
            max_iter: 50,
            ..Default::default()
        };
        let result = secant(|x| x * x + 1.0, 1.0, 1.5, &options);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_root_secant_from_seed() {
        let f = |x: f64| x - 3.0 * x.cos();
        let result =
            find_root(f, 0.0, RootMethod::Secant, &ScalarOptions::default()).expect("no root");
        assert!((result.root - 1.170120950002626).abs() < 1e-9);
        assert!(f(result.root).abs() < 1e-10);
    }

    #[test]
    fn test_find_root_newton_from_seed() {
        let f = |x: f64| (2.0 * x).cos() * x.powi(3);
        let result =
            find_root(f, 1.0, RootMethod::Newton, &ScalarOptions::default()).expect("no root");
        assert!((result.root - std::f64::consts::FRAC_PI_4).abs() < 1e-8);
    }

    #[test]
    fn test_find_root_rejects_non_finite_seed() {
        let options = ScalarOptions::default();
        let result = find_root(|x| x, f64::NAN, RootMethod::Secant, &options);
        assert!(matches!(result, Err(OptimizeError::InvalidParameter { .. })));
    }

    #[test]
    fn test_roots_from_seeds_keeps_order() {
        let seeds = [0.0, 1.0, 2.0];
        let outcomes = roots_from_seeds(
            |x: f64| x - 3.0 * x.cos(),
            &seeds,
            RootMethod::Secant,
            &ScalarOptions::default(),
        );
        assert_eq!(outcomes.len(), 3);
        for (outcome, seed) in outcomes.iter().zip(seeds) {
            assert_eq!(outcome.seed, seed);
            let root = outcome.root().expect("seed did not converge");
            assert!((root - 1.170120950002626).abs() < 1e-9);
        }
    }
}
