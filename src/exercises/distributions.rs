//! Two normal distributions, each drawn as a PDF panel with a shaded tail
//! and a CDF panel with a reference marker.

use super::DISTRIBUTION_SAMPLES;
use crate::integrate::trapezoid;
use crate::stats::{
    CdfMarker, DistributionCurve, Normal, StatsError, StatsResult, TailRegion, evaluate_curve,
};

/// Everything needed to draw one PDF/CDF pair.
#[derive(Debug, Clone)]
pub struct DistributionPanel {
    pub distribution: Normal,
    /// Plotted window.
    pub window: (f64, f64),
    pub curve: DistributionCurve,
    pub region: TailRegion,
    pub marker: CdfMarker,
    /// Upper y-limit of the PDF axis.
    pub pdf_ylim: f64,
    /// Trapezoid integral of the PDF over the window.
    pub mass: f64,
    /// Trapezoid integral of the PDF over the shaded samples.
    pub region_mass: f64,
}

impl DistributionPanel {
    /// Evaluate a panel on [`DISTRIBUTION_SAMPLES`] points.
    pub fn build(
        distribution: Normal,
        window: (f64, f64),
        region: TailRegion,
        marker_x: f64,
        pdf_ylim: f64,
    ) -> StatsResult<Self> {
        let curve = evaluate_curve(&distribution, window.0, window.1, DISTRIBUTION_SAMPLES)?;
        let mass = integrate(&curve.x, &curve.pdf)?;

        let shaded = region.shade(&curve.x, &curve.pdf);
        let (xs, ys): (Vec<f64>, Vec<f64>) = shaded.into_iter().unzip();
        let region_mass = if xs.len() < 2 {
            0.0
        } else {
            integrate(&xs, &ys)?
        };

        Ok(Self {
            distribution,
            window,
            marker: CdfMarker::at(&distribution, marker_x),
            curve,
            region,
            pdf_ylim,
            mass,
            region_mass,
        })
    }

    /// Exact tail probability from the CDF.
    pub fn probability(&self) -> f64 {
        self.region.probability(&self.distribution)
    }

    /// Annotation for the shaded tail.
    pub fn label(&self) -> String {
        self.region.label(&self.distribution)
    }
}

fn integrate(x: &[f64], y: &[f64]) -> StatsResult<f64> {
    trapezoid(y, x).map_err(|e| StatsError::NumericalError {
        message: e.to_string(),
    })
}

/// `N(0, 1)` below `-0.5` and `N(175, 3)` above `181.5`.
pub fn generate() -> StatsResult<Vec<DistributionPanel>> {
    Ok(vec![
        DistributionPanel::build(
            Normal::standard(),
            (-5.0, 5.0),
            TailRegion::Below(-0.5),
            -0.5,
            0.425,
        )?,
        DistributionPanel::build(
            Normal::new(175.0, 3.0)?,
            (160.0, 190.0),
            TailRegion::Above(181.5),
            181.0,
            0.145,
        )?,
    ])
}
