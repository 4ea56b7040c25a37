//! Brute-force intersection search between two scalar functions.
//!
//! The search seeds a local root finder at the left endpoint of every grid
//! sub-interval, applied to `d(x) = f1(x) - f2(x)`. A converged root is kept
//! only if it falls inside `[lo, hi]` and re-evaluates to `|d(x)| < epsilon`.
//! The search is best-effort: two crossings inside one sub-interval, or a
//! crossing no seed converges to, are missed.

use super::grid::SearchGrid;
use super::root_finding::find_root;
use super::{RootMethod, ScalarOptions};
use crate::optimize::error::{OptimizeError, OptimizeResult};

/// How accepted roots found from different seeds are merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dedup {
    /// Only values comparing equal with `==` collapse.
    Exact,
    /// Sorted roots closer than the given distance to the previously kept
    /// root collapse onto it.
    Tolerance(f64),
}

impl Default for Dedup {
    fn default() -> Self {
        Dedup::Tolerance(1e-6)
    }
}

/// Options for [`find_intersections`].
#[derive(Debug, Clone)]
pub struct IntersectionOptions {
    /// Number of grid points over the interval (at least 2)
    pub samples: usize,
    /// Acceptance tolerance on `|f1(x) - f2(x)|`
    pub epsilon: f64,
    /// Local solver applied at every seed
    pub method: RootMethod,
    /// Merging policy for roots found from different seeds
    pub dedup: Dedup,
    /// Options forwarded to the local solver
    pub solver: ScalarOptions,
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        Self {
            samples: 1000,
            epsilon: 0.01,
            method: RootMethod::default(),
            dedup: Dedup::default(),
            solver: ScalarOptions::default(),
        }
    }
}

/// A seed whose local solve did not produce a root.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedFailure {
    pub seed: f64,
    pub error: OptimizeError,
}

/// Result of an intersection search.
#[derive(Debug, Clone, Default)]
pub struct IntersectionResult {
    /// Accepted intersection abscissae, ascending
    pub points: Vec<f64>,
    /// Number of seeds handed to the solver
    pub seeds_tried: usize,
    /// Converged roots dropped for lying outside the interval or failing the tolerance check
    pub rejected: usize,
    /// Seeds for which the solver did not converge
    pub failures: Vec<SeedFailure>,
}

impl IntersectionResult {
    /// True when no intersection was accepted.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Find every `x` in `[lo, hi]` with `|f1(x) - f2(x)| < epsilon`.
///
/// # Arguments
/// * `f1`, `f2` - Functions to intersect; must be finite on `[lo, hi]`
/// * `lo`, `hi` - Search interval
/// * `options` - Grid resolution, tolerance, solver and dedup policy
///
/// # Returns
/// Accepted points sorted ascending, plus per-seed diagnostics. Solver
/// failures are never errors; they are listed in
/// [`IntersectionResult::failures`].
///
/// # Errors
/// * `InvalidInterval` if `lo >= hi` or either bound is not finite
/// * `InvalidParameter` if `samples < 2`, `epsilon` is not positive, or the
///   dedup tolerance is negative
pub fn find_intersections<F1, F2>(
    f1: F1,
    f2: F2,
    lo: f64,
    hi: f64,
    options: &IntersectionOptions,
) -> OptimizeResult<IntersectionResult>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    if !options.epsilon.is_finite() || options.epsilon <= 0.0 {
        return Err(OptimizeError::InvalidParameter {
            parameter: "epsilon".to_string(),
            message: format!("must be positive and finite, got {}", options.epsilon),
        });
    }
    if let Dedup::Tolerance(tol) = options.dedup
        && (tol.is_nan() || tol < 0.0)
    {
        return Err(OptimizeError::InvalidParameter {
            parameter: "dedup".to_string(),
            message: format!("tolerance must be non-negative, got {}", tol),
        });
    }

    let grid = SearchGrid::new(lo, hi, options.samples)?;
    let difference = |x: f64| f1(x) - f2(x);

    let mut result = IntersectionResult::default();
    let mut accepted = Vec::new();

    for seed in grid.seeds() {
        result.seeds_tried += 1;
        match find_root(&difference, seed, options.method, &options.solver) {
            Ok(root) => {
                let x = root.root;
                if grid.contains(x) && difference(x).abs() < options.epsilon {
                    accepted.push(x);
                } else {
                    result.rejected += 1;
                }
            }
            Err(error) => result.failures.push(SeedFailure { seed, error }),
        }
    }

    accepted.sort_by(f64::total_cmp);
    match options.dedup {
        Dedup::Exact => accepted.dedup_by(|a, b| a == b),
        Dedup::Tolerance(tol) => accepted.dedup_by(|a, b| (*a - *b).abs() <= tol),
    }
    result.points = accepted;

    Ok(result)
}
