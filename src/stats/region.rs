//! Tail regions and CDF reference markers.
//!
//! A [`TailRegion`] is the shaded area under a density curve together with
//! the probability it carries. A [`CdfMarker`] is a point `(x, F(x))` on the
//! cumulative curve from which reference lines are drawn to both axes.

use crate::stats::distribution::ContinuousDistribution;
use std::fmt;

/// One tail of a distribution, cut at a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TailRegion {
    /// `X < x`
    Below(f64),
    /// `X > x`
    Above(f64),
}

impl TailRegion {
    /// Threshold value.
    pub fn threshold(&self) -> f64 {
        match *self {
            TailRegion::Below(x) | TailRegion::Above(x) => x,
        }
    }

    /// Probability mass of the tail.
    pub fn probability<D: ContinuousDistribution>(&self, dist: &D) -> f64 {
        match *self {
            TailRegion::Below(x) => dist.cdf(x),
            TailRegion::Above(x) => dist.sf(x),
        }
    }

    /// True if `x` lies strictly inside the tail.
    pub fn contains(&self, x: f64) -> bool {
        match *self {
            TailRegion::Below(t) => x < t,
            TailRegion::Above(t) => x > t,
        }
    }

    /// Annotation text, e.g. `P(x < -0.50 | N(0.00, 1.00)) = 0.31`.
    pub fn label<D>(&self, dist: &D) -> String
    where
        D: ContinuousDistribution + fmt::Display,
    {
        let op = match self {
            TailRegion::Below(_) => '<',
            TailRegion::Above(_) => '>',
        };
        format!(
            "P(x {} {:.2} | {:.2}) = {:.2}",
            op,
            self.threshold(),
            dist,
            self.probability(dist)
        )
    }

    /// Restrict a sampled density to the tail: `(x, pdf)` pairs inside the
    /// region, in grid order.
    pub fn shade(&self, x: &[f64], pdf: &[f64]) -> Vec<(f64, f64)> {
        x.iter()
            .zip(pdf)
            .filter(|(xi, _)| self.contains(**xi))
            .map(|(&xi, &yi)| (xi, yi))
            .collect()
    }
}

/// A point on a cumulative curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdfMarker {
    pub x: f64,
    pub p: f64,
}

impl CdfMarker {
    /// Marker at `(x, F(x))`.
    pub fn at<D: ContinuousDistribution>(dist: &D, x: f64) -> Self {
        Self { x, p: dist.cdf(x) }
    }
}
