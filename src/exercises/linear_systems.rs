//! The 3x3 and 4x4 dense systems.

use super::{A1, A2, B1, B2};
use crate::linalg::{LinalgResult, LinearSystem, SolutionTable, solve_dense};

/// A system together with its solution.
#[derive(Debug, Clone)]
pub struct SolvedSystem {
    pub system: LinearSystem,
    pub solution: Vec<f64>,
    /// Largest entry of `|A x - b|`.
    pub residual: f64,
    pub table: SolutionTable,
}

impl SolvedSystem {
    pub fn solve(system: LinearSystem, title: &str) -> LinalgResult<Self> {
        let solution = solve_dense(&system)?;
        let residual = system.max_residual(&solution)?;
        Ok(Self {
            table: SolutionTable::new(title, &solution),
            system,
            solution,
            residual,
        })
    }
}

pub fn solve() -> LinalgResult<Vec<SolvedSystem>> {
    Ok(vec![
        SolvedSystem::solve(
            LinearSystem::from_arrays(A1, B1)?,
            "Solution to the first matrix equation",
        )?,
        SolvedSystem::solve(
            LinearSystem::from_arrays(A2, B2)?,
            "Solution to the second matrix equation",
        )?,
    ])
}
