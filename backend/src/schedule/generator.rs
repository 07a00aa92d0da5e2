//! Biased timestep generator
//!
//! Produces a monotonic list of integer timesteps in `[0, num_steps - 1]`
//! whose density is skewed toward the middle of the range.
//!
//! # Pipeline
//!
//! Each stage runs over the complete sequence before the next begins:
//!
//! 1. Evenly spaced fractions over [0, 1]
//! 2. Clip into `[eps, 1 - eps]` so the probit stays finite
//! 3. Warp: `v = m + s * Φ⁻¹(u)`
//! 4. Rescale so `min(v) → 0` and `max(v) → num_steps - 1`
//! 5. Round (ties to even) and clamp into range
//! 6. Forward-fill to guarantee a non-decreasing result
//!
//! Position in the output is meaningful (it is the sampling order), so the
//! last stage repairs in place rather than sorting.
//!
//! # Determinism
//!
//! No randomness is involved. Same `(num_steps, m, s)` → same output.

use log::{debug, trace, warn};

use super::config::BiasConfig;
use super::error::ScheduleError;
use crate::math::{
    clip_unit_interval, forward_fill_monotone, linspace_unit, probit, rescale_to_range,
    round_and_clamp, EPSILON,
};

/// Generate a logit-normal biased sequence of timesteps
///
/// # Arguments
/// * `num_steps` - Total diffusion steps (T), must be at least 1
/// * `m` - Mean shift of the logit-normal distribution (default 0.0)
/// * `s` - Scale of the logit-normal distribution, must be positive (default 0.5)
///
/// # Errors
/// Returns `ScheduleError::InvalidArgument` if `num_steps < 1`, `m` is not
/// finite, or `s` is not finite and positive.
///
/// # Example
/// ```
/// use timestep_scheduler_core_rs::get_biased_timesteps;
///
/// let steps = get_biased_timesteps(5, 0.0, 0.5).unwrap();
/// assert_eq!(steps, vec![0, 2, 2, 2, 4]);
///
/// assert!(get_biased_timesteps(0, 0.0, 0.5).is_err());
/// ```
pub fn get_biased_timesteps(num_steps: i64, m: f64, s: f64) -> Result<Vec<usize>, ScheduleError> {
    let scheduler = BiasedTimestepScheduler::new(BiasConfig { mean: m, scale: s })?;
    scheduler.timesteps(num_steps)
}

/// Reusable generator bound to one set of warp parameters
///
/// # Example
/// ```
/// use timestep_scheduler_core_rs::{BiasConfig, BiasedTimestepScheduler};
///
/// let scheduler = BiasedTimestepScheduler::new(BiasConfig::default()).unwrap();
/// let steps = scheduler.timesteps(1000).unwrap();
///
/// assert_eq!(steps.len(), 1000);
/// assert_eq!(steps[0], 0);
/// assert_eq!(steps[999], 999);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasedTimestepScheduler {
    config: BiasConfig,
}

impl BiasedTimestepScheduler {
    /// Create a scheduler, rejecting parameters that make the warp undefined
    pub fn new(config: BiasConfig) -> Result<Self, ScheduleError> {
        if let Err(e) = config.validate() {
            warn!("Rejected bias config {:?}: {}", config, e);
            return Err(e);
        }
        Ok(Self { config })
    }

    /// Warp parameters this scheduler was built with
    pub fn config(&self) -> &BiasConfig {
        &self.config
    }

    /// Integer timesteps for a horizon of `num_steps`
    ///
    /// The result has exactly `num_steps` elements, each in
    /// `[0, num_steps - 1]`, and is non-decreasing.
    pub fn timesteps(&self, num_steps: i64) -> Result<Vec<usize>, ScheduleError> {
        let n = checked_num_steps(num_steps)?;

        debug!(
            "Generating {} biased timesteps (m={}, s={})",
            n, self.config.mean, self.config.scale
        );

        if n == 1 {
            return Ok(vec![0]);
        }

        let t = self.rescaled(n)?;

        let mut timesteps = round_and_clamp(&t, n - 1);
        forward_fill_monotone(&mut timesteps);

        Ok(timesteps)
    }

    /// Continuous positions after the rescale stage
    ///
    /// These are the values before rounding, clamping and monotonic repair,
    /// so they keep the exact shape of the warp (e.g. symmetry about
    /// `(num_steps - 1) / 2`).
    ///
    /// # Example
    /// ```
    /// use timestep_scheduler_core_rs::{BiasConfig, BiasedTimestepScheduler};
    ///
    /// let scheduler = BiasedTimestepScheduler::new(BiasConfig::default()).unwrap();
    /// let t = scheduler.continuous_timesteps(3).unwrap();
    /// assert_eq!(t, vec![0.0, 1.0, 2.0]);
    /// ```
    pub fn continuous_timesteps(&self, num_steps: i64) -> Result<Vec<f64>, ScheduleError> {
        let n = checked_num_steps(num_steps)?;
        if n == 1 {
            return Ok(vec![0.0]);
        }
        self.rescaled(n)
    }

    /// Stages 1–4 for `n >= 2`
    fn rescaled(&self, n: usize) -> Result<Vec<f64>, ScheduleError> {
        let fractions = linspace_unit(n);
        let clipped = clip_unit_interval(&fractions, EPSILON);

        let BiasConfig { mean, scale } = self.config;
        let warped: Vec<f64> = clipped.iter().map(|&u| mean + scale * probit(u)).collect();

        if let (Some(first), Some(last)) = (warped.first(), warped.last()) {
            trace!("Warped range [{}, {}] over {} steps", first, last, n);
        }

        // |m| large enough to swamp s * z in f64 flattens the warp
        rescale_to_range(&warped, (n - 1) as f64).ok_or_else(|| {
            ScheduleError::invalid(
                "s",
                format!(
                    "warp collapsed to a single value (m={}, s={})",
                    mean, scale
                ),
            )
        })
    }
}

fn checked_num_steps(num_steps: i64) -> Result<usize, ScheduleError> {
    if num_steps < 1 {
        warn!("Rejected num_steps={}", num_steps);
        return Err(ScheduleError::invalid(
            "num_steps",
            format!("must be at least 1, got {}", num_steps),
        ));
    }

    usize::try_from(num_steps).map_err(|_| {
        ScheduleError::invalid(
            "num_steps",
            format!("{} does not fit in addressable memory", num_steps),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_scheduler() -> BiasedTimestepScheduler {
        BiasedTimestepScheduler::new(BiasConfig::default()).unwrap()
    }

    #[test]
    fn test_single_step_is_zero() {
        assert_eq!(default_scheduler().timesteps(1).unwrap(), vec![0]);
        assert_eq!(default_scheduler().continuous_timesteps(1).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_rejects_non_positive_num_steps() {
        let scheduler = default_scheduler();
        for bad in [0, -1, i64::MIN] {
            let err = scheduler.timesteps(bad).unwrap_err();
            assert!(matches!(
                err,
                ScheduleError::InvalidArgument { name: "num_steps", .. }
            ));
            assert!(scheduler.continuous_timesteps(bad).is_err());
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = BiasedTimestepScheduler::new(BiasConfig {
            mean: 0.0,
            scale: 0.0,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_continuous_endpoints_exact() {
        let t = default_scheduler().continuous_timesteps(50).unwrap();
        assert_eq!(t[0], 0.0);
        assert_eq!(t[49], 49.0);
    }

    #[test]
    fn test_warp_pulls_interior_toward_middle() {
        // Uniform spacing would put index 1 of 5 at 1.0
        let t = default_scheduler().continuous_timesteps(5).unwrap();
        assert!(t[1] > 1.5 && t[1] < 2.0, "t[1] = {}", t[1]);
        assert!(t[3] > 2.0 && t[3] < 2.5, "t[3] = {}", t[3]);
    }

    #[test]
    fn test_swamped_warp_is_error_not_nan() {
        let scheduler = BiasedTimestepScheduler::new(BiasConfig {
            mean: 1e300,
            scale: 0.01,
        })
        .unwrap();

        assert!(scheduler.timesteps(10).is_err());
        assert!(scheduler.continuous_timesteps(10).is_err());
        // Single step never reaches the warp
        assert_eq!(scheduler.timesteps(1).unwrap(), vec![0]);
    }

    #[test]
    fn test_config_accessor() {
        let config = BiasConfig::new(0.3, 2.0).unwrap();
        let scheduler = BiasedTimestepScheduler::new(config).unwrap();
        assert_eq!(scheduler.config(), &config);
    }
}
