//! Distribution parameters for the biased schedule
//!
//! `mean` (m) shifts and `scale` (s) stretches the standard normal before it
//! is mapped back onto the timestep range. Both may be given under their
//! short names `m` / `s` when deserializing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::ScheduleError;

/// Default mean shift of the logit-normal warp
pub const DEFAULT_MEAN: f64 = 0.0;

/// Default scale of the logit-normal warp
pub const DEFAULT_SCALE: f64 = 0.5;

/// Errors raised while loading a [`BiasConfig`] from JSON
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse bias config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid bias config: {0}")]
    Invalid(#[from] ScheduleError),
}

/// Logit-normal warp parameters
///
/// # Example
/// ```
/// use timestep_scheduler_core_rs::BiasConfig;
///
/// let config = BiasConfig::from_json(r#"{"m": 0.2, "s": 1.0}"#).unwrap();
/// assert_eq!(config.mean, 0.2);
/// assert_eq!(config.scale, 1.0);
///
/// assert_eq!(BiasConfig::default().scale, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BiasConfig {
    /// Mean shift (m)
    #[serde(alias = "m")]
    pub mean: f64,

    /// Scale (s), must be positive
    #[serde(alias = "s")]
    pub scale: f64,
}

impl Default for BiasConfig {
    fn default() -> Self {
        Self {
            mean: DEFAULT_MEAN,
            scale: DEFAULT_SCALE,
        }
    }
}

impl BiasConfig {
    /// Create a config from explicit `m` and `s`, validating both
    pub fn new(mean: f64, scale: f64) -> Result<Self, ScheduleError> {
        let config = Self { mean, scale };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parameters keep the warp well-defined
    ///
    /// - `mean` must be finite
    /// - `scale` must be finite and strictly positive (zero collapses the
    ///   rescale, a negative scale reverses the warp)
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if !self.mean.is_finite() {
            return Err(ScheduleError::invalid(
                "m",
                format!("mean must be finite, got {}", self.mean),
            ));
        }

        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ScheduleError::invalid(
                "s",
                format!("scale must be finite and positive, got {}", self.scale),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = BiasConfig::default();
        assert_eq!(config.mean, DEFAULT_MEAN);
        assert_eq!(config.scale, DEFAULT_SCALE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_scale_rejected() {
        let err = BiasConfig::new(0.0, 0.0).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument { name: "s", .. }));
    }

    #[test]
    fn test_negative_scale_rejected() {
        assert!(BiasConfig::new(0.0, -0.5).is_err());
    }

    #[test]
    fn test_non_finite_mean_rejected() {
        let err = BiasConfig::new(f64::NAN, 0.5).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument { name: "m", .. }));
        assert!(BiasConfig::new(f64::INFINITY, 0.5).is_err());
    }

    #[test]
    fn test_non_finite_scale_rejected() {
        assert!(BiasConfig::new(0.0, f64::INFINITY).is_err());
        assert!(BiasConfig::new(0.0, f64::NAN).is_err());
    }
}
