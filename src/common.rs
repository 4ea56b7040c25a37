//! Sampling helpers shared across modules.

/// Generate `n` evenly spaced samples over the closed interval `[lo, hi]`.
///
/// The first sample is exactly `lo` and the last is exactly `hi`.
/// `n == 0` yields an empty vector and `n == 1` yields `[lo]`.
///
/// # Example
///
/// ```
/// use labsolve::common::linspace;
///
/// let x = linspace(0.0, 1.0, 5);
/// assert_eq!(x, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| lo + i as f64 * step).collect();
            points[n - 1] = hi;
            points
        }
    }
}
