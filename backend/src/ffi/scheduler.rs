//! PyO3 wrappers for the timestep generator
//!
//! # Example (from Python)
//!
//! ```python
//! from timestep_scheduler_core_rs import BiasedTimestepScheduler, get_biased_timesteps
//!
//! steps = get_biased_timesteps(1000)          # m=0.0, s=0.5
//! steps = get_biased_timesteps(1000, m=0.3, s=1.0)
//!
//! scheduler = BiasedTimestepScheduler({"m": 0.0, "s": 0.5})
//! order = scheduler.timesteps(1000)
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{parse_bias_config, schedule_error_to_py};
use crate::schedule::{
    get_biased_timesteps, BiasConfig, BiasedTimestepScheduler, DEFAULT_MEAN, DEFAULT_SCALE,
};

/// Generate a logit-normal biased list of timesteps
///
/// # Errors
///
/// Raises ValueError if `num_steps < 1`, `m` is not finite, or `s` is not
/// finite and positive.
#[pyfunction]
#[pyo3(name = "get_biased_timesteps", signature = (num_steps, m = DEFAULT_MEAN, s = DEFAULT_SCALE))]
pub fn py_get_biased_timesteps(num_steps: i64, m: f64, s: f64) -> PyResult<Vec<usize>> {
    get_biased_timesteps(num_steps, m, s).map_err(schedule_error_to_py)
}

/// Python wrapper for BiasedTimestepScheduler
#[pyclass(name = "BiasedTimestepScheduler")]
pub struct PyBiasedTimestepScheduler {
    inner: BiasedTimestepScheduler,
}

#[pymethods]
impl PyBiasedTimestepScheduler {
    /// Create a scheduler from an optional config dict
    ///
    /// # Errors
    ///
    /// Raises ValueError if the dict has unknown fields or invalid values
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let rust_config = match config {
            Some(dict) => parse_bias_config(dict)?,
            None => BiasConfig::default(),
        };

        let inner = BiasedTimestepScheduler::new(rust_config).map_err(schedule_error_to_py)?;

        Ok(PyBiasedTimestepScheduler { inner })
    }

    /// Integer timesteps for a horizon of `num_steps`
    fn timesteps(&self, num_steps: i64) -> PyResult<Vec<usize>> {
        self.inner.timesteps(num_steps).map_err(schedule_error_to_py)
    }

    /// Rescaled positions before rounding and monotonic repair
    fn continuous_timesteps(&self, num_steps: i64) -> PyResult<Vec<f64>> {
        self.inner
            .continuous_timesteps(num_steps)
            .map_err(schedule_error_to_py)
    }

    #[getter]
    fn mean(&self) -> f64 {
        self.inner.config().mean
    }

    #[getter]
    fn scale(&self) -> f64 {
        self.inner.config().scale
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "BiasedTimestepScheduler(mean={}, scale={})",
            config.mean, config.scale
        )
    }
}
