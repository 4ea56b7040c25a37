//! Continuous probability distributions.

mod normal;

pub use normal::Normal;

/// Helper module for special functions used in distributions.
pub(crate) mod special {
    use numr::algorithm::special::scalar as numr_special;

    /// Standard normal PDF constant: 1/sqrt(2π)
    pub const INV_SQRT_2PI: f64 = 0.3989422804014327;

    /// Complementary error function: erfc(x) = 1 - erf(x)
    pub fn erfc(x: f64) -> f64 {
        numr_special::erfc_scalar(x)
    }

    /// Inverse error function.
    pub fn erfinv(x: f64) -> f64 {
        numr_special::erfinv_scalar(x)
    }

    /// Standard normal CDF: Φ(x). Φ(0) is exactly one half.
    pub fn norm_cdf(x: f64) -> f64 {
        if x == 0.0 {
            return 0.5;
        }
        0.5 * erfc(-x / std::f64::consts::SQRT_2)
    }

    /// Standard normal quantile function: Φ⁻¹(p)
    pub fn norm_ppf(p: f64) -> f64 {
        if p == 0.5 {
            return 0.0;
        }
        std::f64::consts::SQRT_2 * erfinv(2.0 * p - 1.0)
    }
}
