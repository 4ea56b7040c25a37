//! Dense solve of `A x = b` through an LU factorization on the backend.

use crate::linalg::error::{LinalgError, LinalgResult};
use crate::linalg::system::LinearSystem;
use numr::algorithm::linalg::LinearAlgebraAlgorithms;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Solve `A x = b` where `a` is n×n and `b` has length n.
///
/// `b` is lifted to an n×1 column for the backend solve and the result is
/// flattened back to length n.
pub fn solve_dense_impl<R, C>(client: &C, a: &Tensor<R>, b: &Tensor<R>) -> LinalgResult<Tensor<R>>
where
    R: Runtime,
    C: LinearAlgebraAlgorithms<R> + RuntimeClient<R>,
{
    let a_shape = a.shape();
    if a_shape.len() != 2 || a_shape[0] != a_shape[1] || a_shape[0] == 0 {
        return Err(LinalgError::NotSquare {
            rows: a_shape.first().copied().unwrap_or(0),
            cols: a_shape.get(1).copied().unwrap_or(0),
        });
    }
    let n = a_shape[0];
    if b.shape() != [n] {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            actual: b.shape().iter().product(),
            context: "solve_dense".to_string(),
        });
    }

    let b_col = b.reshape(&[n, 1])?;
    let x_col = LinearAlgebraAlgorithms::solve(client, a, &b_col)?;
    Ok(x_col.reshape(&[n])?)
}

/// Solve a [`LinearSystem`] on the client's device.
///
/// # Errors
///
/// Propagates backend failures; a non-finite solution is reported as
/// `Singular`.
pub fn solve_system_impl<R, C>(client: &C, system: &LinearSystem) -> LinalgResult<Vec<f64>>
where
    R: Runtime,
    C: LinearAlgebraAlgorithms<R> + RuntimeClient<R>,
{
    let n = system.dim();
    let a = Tensor::<R>::from_slice(system.coefficients(), &[n, n], client.device());
    let b = Tensor::<R>::from_slice(system.constants(), &[n], client.device());

    let x = solve_dense_impl(client, &a, &b)?;
    let values: Vec<f64> = x.to_vec();

    if values.iter().any(|v| !v.is_finite()) {
        return Err(LinalgError::Singular {
            context: format!("{}x{} dense solve", n, n),
        });
    }
    Ok(values)
}
