//! Probability distributions and their sampled curves.
//!
//! # Distributions
//!
//! Distributions have both scalar and batch (tensor) methods:
//!
//! ```ignore
//! use labsolve::stats::{Normal, ContinuousDistribution};
//!
//! let n = Normal::standard();
//!
//! // Scalar - for single values
//! let p = n.pdf(0.0);
//!
//! // Batch - for tensor operations
//! let x = Tensor::<CpuRuntime>::from_slice(&[0.0, 1.0, 2.0], &[3], &device);
//! let p_batch = n.pdf_tensor(&x, &client)?;
//! ```
//!
//! # Curves and regions
//!
//! [`evaluate_curve`] samples PDF and CDF over a grid. [`TailRegion`] and
//! [`CdfMarker`] describe the annotated parts of a distribution plot.

mod continuous;
mod distribution;
mod error;
mod evaluate;
mod region;

pub use continuous::Normal;
pub use distribution::{ContinuousDistribution, Distribution};
pub use error::{StatsError, StatsResult};
pub use evaluate::{DistributionCurve, evaluate_at, evaluate_curve};
pub use region::{CdfMarker, TailRegion};
