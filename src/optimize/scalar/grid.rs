//! Evenly spaced seed grids over a closed interval.

use crate::common::linspace;
use crate::optimize::error::{OptimizeError, OptimizeResult};

/// An ordered set of sample points partitioning `[lo, hi]` into `n - 1`
/// equal sub-intervals.
///
/// The grid only seeds local solvers; a root is never read off the grid
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchGrid {
    lo: f64,
    hi: f64,
    points: Vec<f64>,
}

impl SearchGrid {
    /// Build a grid of `n` points over `[lo, hi]`.
    ///
    /// # Errors
    /// * `InvalidInterval` if the bounds are not finite or `lo >= hi`
    /// * `InvalidParameter` if `n < 2`
    pub fn new(lo: f64, hi: f64, n: usize) -> OptimizeResult<Self> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(OptimizeError::InvalidInterval {
                a: lo,
                b: hi,
                context: "search grid".to_string(),
            });
        }
        if n < 2 {
            return Err(OptimizeError::InvalidParameter {
                parameter: "samples".to_string(),
                message: format!("need at least 2 grid points, got {}", n),
            });
        }

        Ok(Self {
            lo,
            hi,
            points: linspace(lo, hi, n),
        })
    }

    /// Lower bound of the interval.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound of the interval.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// All grid points in ascending order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a grid holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Width of one sub-interval.
    pub fn step(&self) -> f64 {
        (self.hi - self.lo) / (self.points.len() - 1) as f64
    }

    /// Adjacent point pairs `(x_i, x_{i+1})`.
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Left endpoint of every sub-interval, used as the solver seed.
    pub fn seeds(&self) -> impl Iterator<Item = f64> + '_ {
        self.intervals().map(|(left, _)| left)
    }

    /// True when `x` lies inside the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let grid = SearchGrid::new(-5.0, 5.0, 1000).unwrap();
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid.points()[0], -5.0);
        assert_eq!(grid.points()[999], 5.0);
        assert!((grid.step() - 10.0 / 999.0).abs() < 1e-15);
        assert_eq!(grid.intervals().count(), 999);
    }

    #[test]
    fn test_grid_seeds_are_left_endpoints() {
        let grid = SearchGrid::new(0.0, 1.0, 5).unwrap();
        let seeds: Vec<f64> = grid.seeds().collect();
        assert_eq!(seeds, vec![0.0, 0.25, 0.5, 0.75]);
        assert!(!seeds.contains(&1.0));
    }

    #[test]
    fn test_grid_rejects_bad_interval() {
        assert!(matches!(
            SearchGrid::new(5.0, -5.0, 10),
            Err(OptimizeError::InvalidInterval { .. })
        ));
        assert!(matches!(
            SearchGrid::new(1.0, 1.0, 10),
            Err(OptimizeError::InvalidInterval { .. })
        ));
        assert!(SearchGrid::new(f64::NEG_INFINITY, 0.0, 10).is_err());
    }

    #[test]
    fn test_grid_rejects_too_few_points() {
        assert!(matches!(
            SearchGrid::new(0.0, 1.0, 1),
            Err(OptimizeError::InvalidParameter { .. })
        ));
        assert!(SearchGrid::new(0.0, 1.0, 2).is_ok());
    }

    #[test]
    fn test_grid_contains_is_closed() {
        let grid = SearchGrid::new(-1.0, 1.0, 3).unwrap();
        assert!(grid.contains(-1.0));
        assert!(grid.contains(1.0));
        assert!(!grid.contains(1.0 + 1e-12));
        assert!(!grid.contains(f64::NAN));
    }
}
