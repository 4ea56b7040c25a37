//! Sampled PDF/CDF curves.

use crate::common::linspace;
use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::{StatsError, StatsResult};

/// A distribution sampled over a grid: one PDF and one CDF value per abscissa.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionCurve {
    pub x: Vec<f64>,
    pub pdf: Vec<f64>,
    pub cdf: Vec<f64>,
}

impl DistributionCurve {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(x, pdf)` pairs.
    pub fn pdf_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.pdf.iter().copied())
    }

    /// `(x, cdf)` pairs.
    pub fn cdf_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.cdf.iter().copied())
    }

    /// Largest density value on the grid.
    pub fn pdf_max(&self) -> f64 {
        self.pdf.iter().copied().fold(0.0, f64::max)
    }
}

/// Evaluate a distribution at explicit sample points.
///
/// # Errors
///
/// Returns `EmptyData` for an empty grid and `NumericalError` if any sample
/// point is not finite.
pub fn evaluate_at<D: ContinuousDistribution>(
    dist: &D,
    x: &[f64],
) -> StatsResult<DistributionCurve> {
    if x.is_empty() {
        return Err(StatsError::EmptyData {
            context: "evaluate_at".to_string(),
        });
    }
    if let Some(bad) = x.iter().find(|v| !v.is_finite()) {
        return Err(StatsError::NumericalError {
            message: format!("sample point {} is not finite", bad),
        });
    }

    Ok(DistributionCurve {
        x: x.to_vec(),
        pdf: dist.pdf_values(x),
        cdf: dist.cdf_values(x),
    })
}

/// Evaluate a distribution on `n` evenly spaced points over `[lo, hi]`.
///
/// # Errors
///
/// Returns `InvalidParameter` when `lo >= hi` or `n < 2`.
pub fn evaluate_curve<D: ContinuousDistribution>(
    dist: &D,
    lo: f64,
    hi: f64,
    n: usize,
) -> StatsResult<DistributionCurve> {
    if lo.is_nan() || hi.is_nan() || lo >= hi {
        return Err(StatsError::InvalidParameter {
            name: "hi".to_string(),
            value: hi,
            reason: format!("must exceed lo = {}", lo),
        });
    }
    if n < 2 {
        return Err(StatsError::InvalidParameter {
            name: "n".to_string(),
            value: n as f64,
            reason: "need at least 2 samples".to_string(),
        });
    }
    evaluate_at(dist, &linspace(lo, hi, n))
}
