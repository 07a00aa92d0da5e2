//! Standard normal quantile (probit)
//!
//! Φ⁻¹ is expressed through the inverse complementary error function from
//! `statrs`:
//!
//! ```text
//! Φ⁻¹(p) = -√2 · erfc⁻¹(2p)
//! ```
//!
//! This is the same identity `statrs::distribution::Normal::inverse_cdf`
//! uses, without constructing a distribution object per call.

use statrs::function::erf::erfc_inv;
use std::f64::consts::SQRT_2;

/// Unit machine epsilon for `f64`: the smallest `x` such that `1.0 + x != 1.0`.
///
/// Used to pull the endpoints 0 and 1 off the probit's poles.
pub const EPSILON: f64 = f64::EPSILON;

/// Inverse CDF of the standard normal distribution
///
/// Finite for every `p` in the open interval (0, 1). Returns `-inf` at 0,
/// `+inf` at 1 and NaN outside [0, 1].
///
/// # Example
/// ```
/// use timestep_scheduler_core_rs::math::probit;
///
/// assert_eq!(probit(0.5), 0.0);
/// assert!((probit(0.975) - 1.959964).abs() < 1e-6);
/// ```
pub fn probit(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    -SQRT_2 * erfc_inv(2.0 * p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probit_median_is_zero() {
        assert_eq!(probit(0.5), 0.0);
    }

    #[test]
    fn test_probit_known_quantiles() {
        // Reference values from standard normal tables
        let cases = [
            (0.025, -1.959_963_984_540_054),
            (0.25, -0.674_489_750_196_081_7),
            (0.75, 0.674_489_750_196_081_7),
            (0.841_344_746_068_542_9, 1.0),
            (0.999, 3.090_232_306_167_813_5),
        ];

        for (p, expected) in cases {
            let actual = probit(p);
            assert!(
                (actual - expected).abs() < 1e-9,
                "probit({}) = {}, expected {}",
                p,
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_probit_finite_at_clipped_endpoints() {
        let low = probit(EPSILON);
        let high = probit(1.0 - EPSILON);

        assert!(low.is_finite() && high.is_finite());
        assert!(low < -8.0 && low > -8.3, "probit(eps) = {}", low);
        assert!((low + high).abs() < 1e-9, "tails should be symmetric");
    }

    #[test]
    fn test_probit_poles_and_out_of_domain() {
        assert_eq!(probit(0.0), f64::NEG_INFINITY);
        assert_eq!(probit(1.0), f64::INFINITY);
        assert!(probit(-0.1).is_nan());
        assert!(probit(1.1).is_nan());
        assert!(probit(f64::NAN).is_nan());
    }
}
