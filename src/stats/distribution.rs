//! Distribution traits.

use crate::stats::error::StatsResult;
use numr::algorithm::special::SpecialFunctions;
use numr::error::Result;
use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Summary properties shared by every probability distribution.
pub trait Distribution {
    /// Mean (expected value).
    fn mean(&self) -> f64;

    /// Variance.
    fn var(&self) -> f64;

    /// Standard deviation.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }
}

/// A distribution over the real line with a density.
///
/// Scalar methods evaluate a single point. Slice helpers map them over a
/// grid. Tensor methods evaluate a whole [`Tensor`] on any numr backend.
pub trait ContinuousDistribution: Distribution {
    /// Probability density function.
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function: P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function: P(X > x).
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Percent point function (inverse CDF).
    fn ppf(&self, p: f64) -> StatsResult<f64>;

    /// Density at every point of `x`.
    fn pdf_values(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.pdf(xi)).collect()
    }

    /// Cumulative probability at every point of `x`.
    fn cdf_values(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.cdf(xi)).collect()
    }

    /// Density evaluated element-wise on a tensor.
    fn pdf_tensor<R: Runtime, C>(&self, x: &Tensor<R>, client: &C) -> Result<Tensor<R>>
    where
        C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>;

    /// Cumulative probability evaluated element-wise on a tensor.
    fn cdf_tensor<R: Runtime, C>(&self, x: &Tensor<R>, client: &C) -> Result<Tensor<R>>
    where
        C: TensorOps<R> + ScalarOps<R> + SpecialFunctions<R> + RuntimeClient<R>;
}
