//! Closed-form moments of a portfolio of two risky assets.
//!
//! ## Mathematical Formulas
//!
//! **Expected return**: μₚ = w_A·μ_A + w_B·μ_B
//! **Variance**: σₚ² = w_A²·σ_A² + w_B²·σ_B² + 2·w_A·w_B·ρ·σ_A·σ_B
//!
//! For ρ ∈ [-1, 1] the variance is bounded below by (w_A·σ_A − w_B·σ_B)² ≥ 0,
//! so the standard deviation is always real.

use num_traits::Float;

/// Expected return of the portfolio `(weight_a, weight_b)`.
///
/// # Examples
/// ```
/// use frontier_core::math::portfolio_return;
///
/// let r = portfolio_return(0.5_f64, 0.5, 0.16, 0.06);
/// assert!((r - 0.11).abs() < 1e-12);
/// ```
#[inline]
pub fn portfolio_return<T: Float>(weight_a: T, weight_b: T, return_a: T, return_b: T) -> T {
    weight_a * return_a + weight_b * return_b
}

/// Second moments of the two assets, precomputed once per curve.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float`
///
/// # Examples
/// ```
/// use frontier_core::math::TwoAssetMoments;
///
/// let moments = TwoAssetMoments::new(0.3_f64, 0.2, 0.0);
/// let risk = moments.risk(0.5, 0.5);
/// assert!((risk - 0.0325_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoAssetMoments<T: Float> {
    /// σ_A²
    pub var_a: T,
    /// σ_B²
    pub var_b: T,
    /// ρ·σ_A·σ_B
    pub cov_ab: T,
}

impl<T: Float> TwoAssetMoments<T> {
    /// Builds the moments from standard deviations and correlation.
    pub fn new(std_dev_a: T, std_dev_b: T, correlation: T) -> Self {
        Self {
            var_a: std_dev_a * std_dev_a,
            var_b: std_dev_b * std_dev_b,
            cov_ab: correlation * std_dev_a * std_dev_b,
        }
    }

    /// Portfolio variance for the given weights.
    #[inline]
    pub fn variance(&self, weight_a: T, weight_b: T) -> T {
        let two = T::one() + T::one();
        weight_a * weight_a * self.var_a
            + weight_b * weight_b * self.var_b
            + two * weight_a * weight_b * self.cov_ab
    }

    /// Portfolio standard deviation for the given weights.
    ///
    /// The radicand is floored at zero: with perfectly negatively correlated
    /// assets the exact variance can be zero and rounding may push it a few
    /// ulps below.
    #[inline]
    pub fn risk(&self, weight_a: T, weight_b: T) -> T {
        self.variance(weight_a, weight_b).max(T::zero()).sqrt()
    }
}
