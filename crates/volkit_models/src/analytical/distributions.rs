//! Standard normal distribution functions.
//!
//! Provides `norm_cdf` and `norm_pdf`, generic over `T: Float` so the
//! pricing formulas work with both `f32` and `f64`.

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, Abramowitz & Stegun 7.1.26.
///
/// Maximum absolute error 1.5e-7 over the whole real line. The
/// negative half-line uses the reflection erfc(-x) = 2 - erfc(x),
/// which also makes `norm_cdf(x) + norm_cdf(-x) == 1` exact by
/// construction rather than only up to the approximation error.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);

    // Horner evaluation of the degree-5 polynomial in t
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        T::from(2.0).unwrap() - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = (1/2)·erfc(-x/√2), accurate to at least 1e-7 for all finite
/// inputs.
///
/// # Examples
/// ```
/// use volkit_models::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1/√(2π))·exp(-x²/2).
///
/// # Examples
/// ```
/// use volkit_models::analytical::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let scale = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    scale * (-half * x * x).exp()
}
