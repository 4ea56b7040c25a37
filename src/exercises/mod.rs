//! The three fixed exercises, computed as plain data.
//!
//! Each submodule evaluates one exercise from its hard-coded constants and
//! returns a report; printing and plotting are left to the caller.
//!
//! - [`distributions`] - Normal PDF/CDF panels with shaded tails
//! - [`intersections`] - Roots and crossings of two nonlinear functions
//! - [`linear_systems`] - Two dense systems and their solution tables

pub mod distributions;
pub mod intersections;
pub mod linear_systems;

/// Samples per distribution curve.
pub const DISTRIBUTION_SAMPLES: usize = 1000;

/// Search interval for the intersection exercise.
pub const INTERSECTION_INTERVAL: (f64, f64) = (-5.0, 5.0);

/// Points in the sampled curves drawn behind the intersections.
pub const PLOT_SAMPLES: usize = 400;

/// Secant seeds for `x - 3 cos(x) = 0`.
pub const F1_SEEDS: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];

/// Secant seeds for `cos(2x) x^3 = 0`.
pub const F2_SEEDS: [f64; 5] = [-1.0, 0.0, 1.0, 2.0, 3.0];

/// First coefficient matrix.
pub const A1: [[f64; 3]; 3] = [[3.0, 1.0, -1.0], [1.0, 4.0, 1.0], [2.0, 1.0, 2.0]];

/// First constant vector.
pub const B1: [f64; 3] = [2.0, 12.0, 10.0];

/// Second coefficient matrix.
pub const A2: [[f64; 4]; 4] = [
    [1.0, -10.0, 2.0, 4.0],
    [3.0, 0.0, 12.0, 0.0],
    [9.0, 2.0, 3.0, 4.0],
    [0.0, 0.0, 7.0, 0.0],
];

/// Second constant vector.
pub const B2: [f64; 4] = [2.0, 12.0, 21.0, 37.0];
