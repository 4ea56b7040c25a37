//! labsolve - Three numerical exercises with their plots
//!
//! labsolve evaluates two normal distributions with shaded tail regions,
//! locates the roots and crossings of two nonlinear functions, and solves two
//! small dense linear systems. Every computation returns plain data; drawing
//! is a separate, optional consumer of that data.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │             bin/problem_a, problem_b, problem_c         │
//! │              (print reports, render PNG figures)        │
//! └──────────────┬──────────────────────────┬───────────────┘
//!                │ uses                     │ feature = "plot"
//! ┌──────────────▼──────────────┐  ┌────────▼───────────────┐
//! │          exercises          │  │          plot          │
//! └──────────────┬──────────────┘  └────────────────────────┘
//!                │ uses
//! ┌──────────────▼──────────────────────────────────────────┐
//! │          optimize, stats, integrate, linalg             │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                              │
//! │        (tensors, special functions, dense solve)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`optimize`] - Secant/Newton root finding and grid-seeded intersection search
//! - [`stats`] - Normal distribution, sampled curves, tail regions
//! - [`integrate`] - Trapezoidal rule over sampled data
//! - [`linalg`] - Dense `A x = b` systems and solution tables
//! - [`exercises`] - The three fixed exercises as data
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `plot`  | Render exercise figures to PNG | plotters |
//!
//! # Example
//!
//! ```
//! use labsolve::optimize::{find_intersections, IntersectionOptions};
//!
//! let result = find_intersections(
//!     |x| x - 3.0 * x.cos(),
//!     |x| (2.0 * x).cos() * x.powi(3),
//!     -5.0,
//!     5.0,
//!     &IntersectionOptions::default(),
//! )?;
//! assert_eq!(result.points.len(), 5);
//! # Ok::<(), labsolve::optimize::OptimizeError>(())
//! ```

pub mod common;
pub mod exercises;
pub mod integrate;
pub mod linalg;
pub mod optimize;
#[cfg(feature = "plot")]
pub mod plot;
pub mod stats;

// Re-export main types for convenience
pub use integrate::{IntegrateError, IntegrateResult, trapezoid, trapezoid_uniform};
pub use linalg::{
    LinalgError, LinalgResult, LinearSystem, LinearSystemAlgorithms, SolutionTable, solve_dense,
};
pub use optimize::{OptimizeError, OptimizeResult, scalar::*};
pub use stats::{
    CdfMarker, ContinuousDistribution, Distribution, DistributionCurve, Normal, StatsError,
    StatsResult, TailRegion,
};

// Re-export numr types that users will commonly need
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
