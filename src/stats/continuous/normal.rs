//! Normal (Gaussian) distribution.

use super::special::{self, INV_SQRT_2PI};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};
use numr::algorithm::special::SpecialFunctions;
use numr::error::Result;
use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;
use std::fmt;

/// Normal (Gaussian) distribution.
///
/// The normal distribution with mean μ and standard deviation σ has PDF:
///
/// f(x) = (1 / (σ√(2π))) exp(-(x-μ)² / (2σ²))
///
/// and CDF F(x) = ½ erfc(-(x-μ) / (σ√2)).
///
/// # Examples
///
/// ```
/// use labsolve::stats::{ContinuousDistribution, Normal};
///
/// let n = Normal::new(175.0, 3.0)?;
/// assert_eq!(n.to_string(), "N(175, 3)");
/// assert_eq!(n.cdf(175.0), 0.5);
/// assert!((n.sf(181.5) - 0.0151).abs() < 1e-4);
/// # Ok::<(), labsolve::stats::StatsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    /// Mean (μ)
    mu: f64,
    /// Standard deviation (σ)
    sigma: f64,
}

impl Normal {
    /// Create a new normal distribution with given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns an error if sigma is not positive and finite, or mu is not finite.
    pub fn new(mu: f64, sigma: f64) -> StatsResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(StatsError::InvalidParameter {
                name: "sigma".to_string(),
                value: sigma,
                reason: "must be positive and finite".to_string(),
            });
        }
        if !mu.is_finite() {
            return Err(StatsError::InvalidParameter {
                name: "mu".to_string(),
                value: mu,
                reason: "must be finite".to_string(),
            });
        }
        Ok(Self { mu, sigma })
    }

    /// Create a standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Get the mean parameter.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Get the standard deviation parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Standardize a value: z = (x - μ) / σ
    pub fn z_score(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "N({:.*}, {:.*})", p, self.mu, p, self.sigma),
            None => write!(f, "N({}, {})", self.mu, self.sigma),
        }
    }
}

impl Distribution for Normal {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn var(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn std(&self) -> f64 {
        self.sigma
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z = self.z_score(x);
        INV_SQRT_2PI * (-0.5 * z * z).exp() / self.sigma
    }

    fn cdf(&self, x: f64) -> f64 {
        special::norm_cdf(self.z_score(x))
    }

    fn sf(&self, x: f64) -> f64 {
        special::norm_cdf(-self.z_score(x))
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidProbability { value: p });
        }
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.mu + self.sigma * special::norm_ppf(p))
    }

    fn pdf_tensor<R: Runtime, C>(&self, x: &Tensor<R>, client: &C) -> Result<Tensor<R>>
    where
        C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
    {
        // z = (x - μ) / σ
        let centered = client.sub_scalar(x, self.mu)?;
        let z = client.mul_scalar(&centered, 1.0 / self.sigma)?;

        // exp(-0.5 * z²)
        let z_sq = client.square(&z)?;
        let neg_half_z_sq = client.mul_scalar(&z_sq, -0.5)?;
        let exp_term = client.exp(&neg_half_z_sq)?;

        client.mul_scalar(&exp_term, INV_SQRT_2PI / self.sigma)
    }

    fn cdf_tensor<R: Runtime, C>(&self, x: &Tensor<R>, client: &C) -> Result<Tensor<R>>
    where
        C: TensorOps<R> + ScalarOps<R> + SpecialFunctions<R> + RuntimeClient<R>,
    {
        let centered = client.sub_scalar(x, self.mu)?;
        let z = client.mul_scalar(&centered, 1.0 / self.sigma)?;

        // Φ(z) = 0.5 * erfc(-z / √2)
        let z_scaled = client.mul_scalar(&z, -std::f64::consts::FRAC_1_SQRT_2)?;
        let erfc_val = client.erfc(&z_scaled)?;
        client.mul_scalar(&erfc_val, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    #[test]
    fn test_normal_creation() {
        let n = Normal::new(175.0, 3.0).unwrap();
        assert_eq!(n.mu(), 175.0);
        assert_eq!(n.sigma(), 3.0);

        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Normal::standard().to_string(), "N(0, 1)");
        assert_eq!(
            format!("{:.2}", Normal::new(175.0, 3.0).unwrap()),
            "N(175.00, 3.00)"
        );
    }

    #[test]
    fn test_normal_pdf() {
        let n = Normal::standard();
        assert!((n.pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
        assert!((n.pdf(1.0) - n.pdf(-1.0)).abs() < 1e-15);
        assert!((n.pdf(1.0) - 0.24197072451914337).abs() < 1e-12);

        // Peak of N(175, 3) is 1/(3√(2π))
        let tall = Normal::new(175.0, 3.0).unwrap();
        assert!((tall.pdf(175.0) - 0.1329807601338109).abs() < 1e-12);
    }

    #[test]
    fn test_cdf_at_mean_is_exactly_half() {
        assert_eq!(Normal::standard().cdf(0.0), 0.5);
        assert_eq!(Normal::new(175.0, 3.0).unwrap().cdf(175.0), 0.5);
        assert_eq!(Normal::standard().sf(0.0), 0.5);
    }

    #[test]
    fn test_normal_cdf() {
        let n = Normal::standard();
        assert!(n.cdf(-10.0) < 1e-10);
        assert!((1.0 - n.cdf(10.0)) < 1e-10);
        assert!((n.cdf(1.0) - 0.8413447460685429).abs() < 1e-6);
        assert!((n.cdf(-0.5) - 0.3085375387259869).abs() < 1e-6);
        assert!((n.cdf(1.96) - 0.9750021048517796).abs() < 1e-6);

        let tall = Normal::new(175.0, 3.0).unwrap();
        assert!((tall.cdf(181.0) - 0.9772498680518208).abs() < 1e-6);
        assert!((tall.sf(181.5) - 0.015130140010235826).abs() < 1e-6);
    }

    #[test]
    fn test_normal_ppf() {
        let n = Normal::standard();
        assert_eq!(n.ppf(0.5).unwrap(), 0.0);
        for p in [0.1, 0.25, 0.75, 0.9, 0.99] {
            let x = n.ppf(p).unwrap();
            assert!((n.cdf(x) - p).abs() < 1e-8, "roundtrip failed for p={}", p);
        }
        assert!((n.ppf(0.975).unwrap() - 1.96).abs() < 0.001);
        assert_eq!(n.ppf(0.0).unwrap(), f64::NEG_INFINITY);
        assert!(n.ppf(-0.1).is_err());
        assert!(n.ppf(1.1).is_err());

        let tall = Normal::new(175.0, 3.0).unwrap();
        assert!((tall.ppf(0.9772498680518208).unwrap() - 181.0).abs() < 1e-5);
    }

    #[test]
    fn test_normal_moments() {
        let n = Normal::new(5.0, 2.0).unwrap();
        assert_eq!(n.mean(), 5.0);
        assert_eq!(n.var(), 4.0);
        assert_eq!(n.std(), 2.0);
    }

    #[test]
    fn test_repeated_evaluation_is_bit_identical() {
        let n = Normal::new(175.0, 3.0).unwrap();
        let x = crate::common::linspace(160.0, 190.0, 101);
        let first: Vec<u64> = n.cdf_values(&x).iter().map(|v| v.to_bits()).collect();
        let second: Vec<u64> = n.cdf_values(&x).iter().map(|v| v.to_bits()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tensor_matches_scalar() {
        let (client, device) = setup();
        let n = Normal::new(175.0, 3.0).unwrap();
        let xs = crate::common::linspace(160.0, 190.0, 61);
        let x = Tensor::<CpuRuntime>::from_slice(&xs, &[xs.len()], &device);

        let pdf = n.pdf_tensor(&x, &client).unwrap().to_vec::<f64>();
        let cdf = n.cdf_tensor(&x, &client).unwrap().to_vec::<f64>();

        for (i, &xi) in xs.iter().enumerate() {
            assert!((pdf[i] - n.pdf(xi)).abs() < 1e-12);
            assert!((cdf[i] - n.cdf(xi)).abs() < 1e-7);
        }
    }
}
