//! Square linear systems `A x = b`.

use crate::linalg::error::{LinalgError, LinalgResult};
use std::fmt;

/// A square coefficient matrix paired with its constant vector.
///
/// The matrix is stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    dim: usize,
    coefficients: Vec<f64>,
    constants: Vec<f64>,
}

impl LinearSystem {
    /// Build a system from matrix rows and the constant vector.
    ///
    /// # Errors
    ///
    /// * `NotSquare` if the matrix is empty or any row length differs from the row count
    /// * `DimensionMismatch` if `constants` does not match the matrix dimension
    /// * `NonFinite` if any entry is NaN or infinite
    pub fn new(rows: &[Vec<f64>], constants: &[f64]) -> LinalgResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(LinalgError::NotSquare { rows: 0, cols: 0 });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(LinalgError::NotSquare {
                rows: n,
                cols: row.len(),
            });
        }
        if constants.len() != n {
            return Err(LinalgError::DimensionMismatch {
                expected: n,
                actual: constants.len(),
                context: "constant vector".to_string(),
            });
        }

        let coefficients: Vec<f64> = rows.iter().flatten().copied().collect();
        if coefficients.iter().any(|v| !v.is_finite()) {
            return Err(LinalgError::NonFinite {
                context: "coefficient matrix".to_string(),
            });
        }
        if constants.iter().any(|v| !v.is_finite()) {
            return Err(LinalgError::NonFinite {
                context: "constant vector".to_string(),
            });
        }

        Ok(Self {
            dim: n,
            coefficients,
            constants: constants.to_vec(),
        })
    }

    /// Build a system from fixed-size arrays.
    pub fn from_arrays<const N: usize>(
        rows: [[f64; N]; N],
        constants: [f64; N],
    ) -> LinalgResult<Self> {
        let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        Self::new(&rows, &constants)
    }

    /// Number of unknowns.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Row-major coefficient data.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Row `i` of the coefficient matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.coefficients[i * self.dim..(i + 1) * self.dim]
    }

    /// Constant vector `b`.
    pub fn constants(&self) -> &[f64] {
        &self.constants
    }

    /// `A x - b` for a candidate solution.
    pub fn residual(&self, x: &[f64]) -> LinalgResult<Vec<f64>> {
        if x.len() != self.dim {
            return Err(LinalgError::DimensionMismatch {
                expected: self.dim,
                actual: x.len(),
                context: "residual".to_string(),
            });
        }

        Ok((0..self.dim)
            .map(|i| {
                let ax: f64 = self.row(i).iter().zip(x).map(|(a, xj)| a * xj).sum();
                ax - self.constants[i]
            })
            .collect())
    }

    /// Largest absolute entry of the residual.
    pub fn max_residual(&self, x: &[f64]) -> LinalgResult<f64> {
        Ok(self
            .residual(x)?
            .iter()
            .map(|r| r.abs())
            .fold(0.0, f64::max))
    }
}

/// Right-aligned, bracketed rows in the layout of a printed array.
fn write_bracketed(f: &mut fmt::Formatter<'_>, rows: &[&[f64]], width: usize) -> fmt::Result {
    let nested = rows.len() > 1;
    for (i, row) in rows.iter().enumerate() {
        let open = match (nested, i) {
            (true, 0) => "[[",
            (true, _) => " [",
            (false, _) => "[",
        };
        write!(f, "{}", open)?;
        for (j, v) in row.iter().enumerate() {
            if j > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:>width$}", v, width = width)?;
        }
        if nested && i == rows.len() - 1 {
            writeln!(f, "]]")?;
        } else {
            writeln!(f, "]")?;
        }
    }
    Ok(())
}

/// Widest printed entry.
fn cell_width(values: &[f64]) -> usize {
    values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
}

impl fmt::Display for LinearSystem {
    /// Coefficient matrix followed by the constant vector.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<&[f64]> = (0..self.dim).map(|i| self.row(i)).collect();
        write_bracketed(f, &rows, cell_width(&self.coefficients))?;
        write_bracketed(f, &[&self.constants], cell_width(&self.constants))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a1() -> LinearSystem {
        LinearSystem::from_arrays(
            [[3.0, 1.0, -1.0], [1.0, 4.0, 1.0], [2.0, 1.0, 2.0]],
            [2.0, 12.0, 10.0],
        )
        .unwrap()
    }

    #[test]
    fn test_layout() {
        let system = a1();
        assert_eq!(system.dim(), 3);
        assert_eq!(system.row(1), &[1.0, 4.0, 1.0]);
        assert_eq!(system.constants(), &[2.0, 12.0, 10.0]);
        assert_eq!(system.coefficients().len(), 9);
    }

    #[test]
    fn test_residual_of_known_solution() {
        let system = a1();
        let r = system.residual(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(r, vec![0.0, 0.0, 0.0]);
        assert_eq!(system.max_residual(&[1.0, 2.0, 4.0]).unwrap(), 2.0);
        assert!(system.residual(&[1.0]).is_err());
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            LinearSystem::new(&[], &[]),
            Err(LinalgError::NotSquare { .. })
        ));
        assert!(matches!(
            LinearSystem::new(&[vec![1.0, 2.0], vec![3.0]], &[1.0, 2.0]),
            Err(LinalgError::NotSquare { .. })
        ));
        assert!(matches!(
            LinearSystem::new(&[vec![1.0]], &[1.0, 2.0]),
            Err(LinalgError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            LinearSystem::new(&[vec![f64::NAN]], &[1.0]),
            Err(LinalgError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_display() {
        let text = a1().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[[ 3  1 -1]");
        assert_eq!(lines[1], " [ 1  4  1]");
        assert_eq!(lines[2], " [ 2  1  2]]");
        assert_eq!(lines[3], "[ 2 12 10]");
    }
}
