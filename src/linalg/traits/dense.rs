//! Dense linear solve trait.

use crate::linalg::error::LinalgResult;
use crate::linalg::system::LinearSystem;

use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Algorithms for solving square dense systems `A x = b`.
///
/// The coefficient matrix must be non-singular. A singular matrix surfaces
/// either as the backend's own error or as [`LinalgError::Singular`] when the
/// factorization yields non-finite values.
///
/// [`LinalgError::Singular`]: crate::linalg::LinalgError::Singular
pub trait LinearSystemAlgorithms<R: Runtime> {
    /// Solve `A x = b` for a tensor pair.
    ///
    /// # Arguments
    /// - `a`: n×n coefficient matrix
    /// - `b`: length-n constant vector
    ///
    /// # Returns
    /// Length-n solution tensor.
    fn solve_dense(&self, a: &Tensor<R>, b: &Tensor<R>) -> LinalgResult<Tensor<R>>;

    /// Solve a [`LinearSystem`] and return the solution vector.
    fn solve_system(&self, system: &LinearSystem) -> LinalgResult<Vec<f64>>;
}
