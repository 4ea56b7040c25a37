//! Numerical integration of sampled data.
//!
//! - [`trapezoid`] - Trapezoidal rule for slice data
//! - [`trapezoid_uniform`] - Trapezoidal rule with a fixed spacing
//!
//! # Example
//!
//! ```
//! use labsolve::integrate::trapezoid;
//!
//! let x = [0.0, 0.5, 1.0];
//! let y = [0.0, 0.25, 1.0]; // y = x^2
//! let area = trapezoid(&y, &x)?;
//! assert!((area - 0.375).abs() < 1e-12);
//! # Ok::<(), labsolve::integrate::IntegrateError>(())
//! ```

pub mod error;
pub mod quadrature;

pub use error::{IntegrateError, IntegrateResult};
pub use quadrature::{trapezoid, trapezoid_uniform};
