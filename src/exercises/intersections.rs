//! Roots and crossings of `f1(x) = x - 3 cos(x)` and `f2(x) = cos(2x) x^3`.

use super::{F1_SEEDS, F2_SEEDS, INTERSECTION_INTERVAL, PLOT_SAMPLES};
use crate::common::linspace;
use crate::optimize::{
    IntersectionOptions, IntersectionResult, OptimizeResult, RootMethod, ScalarOptions,
    SeedOutcome, find_intersections, roots_from_seeds,
};

pub fn f1(x: f64) -> f64 {
    x - 3.0 * x.cos()
}

pub fn f2(x: f64) -> f64 {
    (2.0 * x).cos() * x.powi(3)
}

/// Both curves sampled for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSamples {
    pub x: Vec<f64>,
    pub f1: Vec<f64>,
    pub f2: Vec<f64>,
}

impl CurveSamples {
    pub fn new(lo: f64, hi: f64, n: usize) -> Self {
        let x = linspace(lo, hi, n);
        Self {
            f1: x.iter().map(|&v| f1(v)).collect(),
            f2: x.iter().map(|&v| f2(v)).collect(),
            x,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntersectionReport {
    /// One outcome per entry of [`F1_SEEDS`].
    pub f1_roots: Vec<SeedOutcome>,
    /// One outcome per entry of [`F2_SEEDS`].
    pub f2_roots: Vec<SeedOutcome>,
    pub intersections: IntersectionResult,
    pub samples: CurveSamples,
}

impl IntersectionReport {
    /// Seeds whose local solve did not converge, across all three searches.
    pub fn failure_count(&self) -> usize {
        let seed_failures = self
            .f1_roots
            .iter()
            .chain(&self.f2_roots)
            .filter(|o| o.result.is_err())
            .count();
        seed_failures + self.intersections.failures.len()
    }
}

/// Solve with the default solver and search options.
pub fn solve() -> OptimizeResult<IntersectionReport> {
    solve_with(&IntersectionOptions::default())
}

pub fn solve_with(options: &IntersectionOptions) -> OptimizeResult<IntersectionReport> {
    let (lo, hi) = INTERSECTION_INTERVAL;
    let solver = ScalarOptions::default();

    Ok(IntersectionReport {
        f1_roots: roots_from_seeds(f1, &F1_SEEDS, RootMethod::Secant, &solver),
        f2_roots: roots_from_seeds(f2, &F2_SEEDS, RootMethod::Secant, &solver),
        intersections: find_intersections(f1, f2, lo, hi, options)?,
        samples: CurveSamples::new(lo, hi, PLOT_SAMPLES),
    })
}
