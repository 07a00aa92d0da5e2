//! Whole-sequence numeric stages
//!
//! Each function consumes or produces a complete sequence. Stage ordering is
//! owned by the caller (`schedule::generator`); nothing here interleaves.

/// Evenly spaced fractions over [0, 1], endpoints included
///
/// The first value is exactly 0.0 and, for `n > 1`, the last is exactly 1.0
/// with a constant step of `1 / (n - 1)` in between. `n == 1` yields `[0.0]`,
/// `n == 0` yields an empty vector.
///
/// # Example
/// ```
/// use timestep_scheduler_core_rs::math::linspace_unit;
///
/// assert_eq!(linspace_unit(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace_unit(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = 1.0 / (n - 1) as f64;
            let mut fractions: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
            // i * step can land one ulp short of 1.0
            fractions[n - 1] = 1.0;
            fractions
        }
    }
}

/// Clamp every value into `[eps, 1 - eps]`
///
/// # Example
/// ```
/// use timestep_scheduler_core_rs::math::{clip_unit_interval, EPSILON};
///
/// let clipped = clip_unit_interval(&[0.0, 0.5, 1.0], EPSILON);
/// assert_eq!(clipped, vec![EPSILON, 0.5, 1.0 - EPSILON]);
/// ```
pub fn clip_unit_interval(values: &[f64], eps: f64) -> Vec<f64> {
    values.iter().map(|&u| u.clamp(eps, 1.0 - eps)).collect()
}

/// Linearly map `values` so that min → 0 and max → `upper`
///
/// Returns `None` when the input is empty or its range is zero (or not
/// finite), since the mapping is undefined there.
///
/// # Example
/// ```
/// use timestep_scheduler_core_rs::math::rescale_to_range;
///
/// let t = rescale_to_range(&[-2.0, 0.0, 2.0], 4.0).unwrap();
/// assert_eq!(t, vec![0.0, 2.0, 4.0]);
///
/// assert!(rescale_to_range(&[1.0, 1.0], 4.0).is_none());
/// ```
pub fn rescale_to_range(values: &[f64], upper: f64) -> Option<Vec<f64>> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if !span.is_finite() || span <= 0.0 {
        return None;
    }

    Some(values.iter().map(|&v| (v - min) / span * upper).collect())
}

/// Round to nearest integer (ties to even), then clamp into `[0, max]`
///
/// # Example
/// ```
/// use timestep_scheduler_core_rs::math::round_and_clamp;
///
/// assert_eq!(round_and_clamp(&[-0.4, 1.5, 2.5, 4.6], 4), vec![0, 2, 2, 4]);
/// ```
pub fn round_and_clamp(values: &[f64], max: usize) -> Vec<usize> {
    let upper = max as f64;
    values
        .iter()
        .map(|&t| t.round_ties_even().clamp(0.0, upper) as usize)
        .collect()
}

/// Forward-fill so the sequence is non-decreasing
///
/// Any element smaller than its predecessor is overwritten with the
/// predecessor. Positions are never reordered.
///
/// # Example
/// ```
/// use timestep_scheduler_core_rs::math::forward_fill_monotone;
///
/// let mut steps = vec![0, 3, 2, 2, 5, 4];
/// forward_fill_monotone(&mut steps);
/// assert_eq!(steps, vec![0, 3, 3, 3, 5, 5]);
/// ```
pub fn forward_fill_monotone<T: Copy + PartialOrd>(values: &mut [T]) {
    for i in 1..values.len() {
        if values[i] < values[i - 1] {
            values[i] = values[i - 1];
        }
    }
}
