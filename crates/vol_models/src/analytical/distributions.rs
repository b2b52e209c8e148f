//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are generic over `T: Float` to support `f64` and `f32`.
//!
//! The CDF is computed as Φ(x) = (1 + erf(x/√2)) / 2, with the error
//! function evaluated by the Abramowitz and Stegun 7.1.26 polynomial
//! approximation (maximum absolute error 1.5e-7).

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26):
/// erf(x) ≈ 1 - (a₁t + a₂t² + a₃t³ + a₄t⁴ + a₅t⁵)·e^(-x²), t = 1/(1 + px)
/// for x >= 0, extended to negative x via erf(-x) = -erf(x).
///
/// Maximum absolute error is 1.5e-7 for all x.
#[inline]
fn erf_approx<T: Float>(x: T) -> T {
    let one = T::one();

    // Odd symmetry: erf(-x) = -erf(x)
    let sign = if x < T::zero() { -one } else { one };
    let x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // t = 1 / (1 + p * x)
    let t = one / (one + p * x);

    // Horner's method for the degree-5 polynomial in t
    let poly = t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))));

    sign * (one - poly * (-x * x).exp())
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as Φ(x) = (1 + erf(x/√2)) / 2.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x), in range [0, 1].
///
/// # Accuracy
/// Accurate to at least 1e-7 for all finite x values.
///
/// # Examples
/// ```
/// use vol_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0_f64);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    // Φ(x) = (1 + erf(x/√2)) / 2
    half * (T::one() + erf_approx(x / sqrt_2))
}

/// Standard normal probability density function.
///
/// Computes φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use vol_models::analytical::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_at_zero() {
        // Φ(0) = 0.5 (within approximation accuracy of 1.5e-7)
        let result = norm_cdf(0.0_f64);
        assert_relative_eq!(result, 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        // Φ(-x) + Φ(x) = 1 for all x (within approximation accuracy)
        let test_values = [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0];
        for x in test_values {
            let cdf_pos = norm_cdf(x);
            let cdf_neg = norm_cdf(-x);
            assert_relative_eq!(cdf_pos + cdf_neg, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values from standard normal tables, at the 1e-7
        // accuracy of the polynomial approximation
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-5);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        // Large |x| should saturate without leaving [0, 1]
        let cdf_large_pos = norm_cdf(8.0_f64);
        assert!(cdf_large_pos > 0.999999);
        assert!(cdf_large_pos <= 1.0);

        let cdf_large_neg = norm_cdf(-8.0_f64);
        assert!(cdf_large_neg < 0.000001);
        assert!(cdf_large_neg >= 0.0);

        // Infinite arguments arise from degenerate d1/d2 limits
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for i in 0..values.len() - 1 {
            let cdf_a = norm_cdf(values[i]);
            let cdf_b = norm_cdf(values[i + 1]);
            assert!(cdf_b > cdf_a, "CDF not monotonic at x = {}", values[i]);
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        let test_values: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for x in test_values {
            let result = norm_cdf(x);
            assert!(result >= 0.0, "CDF < 0 at x = {}", x);
            assert!(result <= 1.0, "CDF > 1 at x = {}", x);
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        let result = norm_cdf(0.0_f32);
        assert!((result - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_norm_pdf_at_zero() {
        // φ(0) = 1 / sqrt(2π)
        let result = norm_pdf(0.0_f64);
        assert_relative_eq!(result, FRAC_1_SQRT_2PI, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        // φ(x) = φ(-x) for all x
        let test_values = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
        for x in test_values {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-7);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-7);
        assert_relative_eq!(norm_pdf(3.0_f64), 0.004431848411938008, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_pdf_non_negative() {
        let test_values: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.1).collect();
        for x in test_values {
            assert!(norm_pdf(x) >= 0.0, "PDF < 0 at x = {}", x);
        }
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Numerical derivative of CDF should approximate PDF.
        // Larger h because the erf approximation error compounds in the
        // numerical derivative.
        let h = 1e-4;
        let test_values = [-2.0, -1.0, 0.0, 1.0, 2.0];
        for x in test_values {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-4);
        }
    }
}
