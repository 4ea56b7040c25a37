//! Scalar (1D) root finding and intersection search.
//!
//! Root finding methods take a function `f: (f64) -> f64` and a starting
//! point. Both methods are local: they converge to whichever root the
//! iteration happens to approach from the seed, which may lie anywhere.
//! [`find_intersections`] drives them across a [`SearchGrid`] to collect the
//! roots of `f1 - f2` inside a bounded interval.

mod grid;
mod intersection;
mod root_finding;

pub use grid::SearchGrid;
pub use intersection::{
    Dedup, IntersectionOptions, IntersectionResult, SeedFailure, find_intersections,
};
pub use root_finding::{SeedOutcome, find_root, newton, roots_from_seeds, secant};

/// Options for scalar root finding.
#[derive(Debug, Clone)]
pub struct ScalarOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Absolute tolerance on the step size
    pub tol: f64,
    /// Relative tolerance on the step size
    pub rtol: f64,
}

impl Default for ScalarOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tol: 1e-12,
            rtol: 1e-12,
        }
    }
}

/// Local iteration used to refine a seed into a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootMethod {
    /// Secant iteration started from the seed and a point perturbed from it.
    #[default]
    Secant,
    /// Newton iteration with a central finite-difference derivative.
    Newton,
}

/// Result from a root finding method.
#[derive(Debug, Clone, PartialEq)]
pub struct RootResult {
    /// The root found
    pub root: f64,
    /// Function value at root
    pub function_value: f64,
    /// Number of iterations used
    pub iterations: usize,
    /// Size of the last step
    pub bracket_width: f64,
}
