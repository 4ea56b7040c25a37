//! Root finding for univariate functions.
//!
//! # Modules
//!
//! - [`scalar`] - Local root finding from a seed, search grids, and the
//!   brute-force intersection search built on top of them
//!
//! # Quick Start
//!
//! ## Scalar Root Finding
//!
//! ```
//! use labsolve::optimize::scalar::{find_root, RootMethod, ScalarOptions};
//!
//! // Find the root of f(x) = x^2 - 4 near x = 3
//! let result = find_root(|x| x * x - 4.0, 3.0, RootMethod::Secant, &ScalarOptions::default())?;
//! assert!((result.root - 2.0).abs() < 1e-10);
//! # Ok::<(), labsolve::optimize::OptimizeError>(())
//! ```
//!
//! ## Intersections
//!
//! ```
//! use labsolve::optimize::scalar::{find_intersections, IntersectionOptions};
//!
//! // x = cos(x) has a single solution near 0.739
//! let result = find_intersections(
//!     |x| x,
//!     |x: f64| x.cos(),
//!     -2.0,
//!     2.0,
//!     &IntersectionOptions::default(),
//! )?;
//! assert_eq!(result.points.len(), 1);
//! # Ok::<(), labsolve::optimize::OptimizeError>(())
//! ```

pub mod error;
pub mod scalar;
pub(crate) mod utils;

pub use error::{OptimizeError, OptimizeResult};
pub use scalar::{
    Dedup, IntersectionOptions, IntersectionResult, RootMethod, RootResult, ScalarOptions,
    SearchGrid, SeedFailure, SeedOutcome, find_intersections, find_root, newton, roots_from_seeds,
    secant,
};
