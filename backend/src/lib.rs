//! Timestep Scheduler Core - Rust Engine
//!
//! Logit-normal biased timestep ordering for diffusion-model sampling.
//!
//! # Architecture
//!
//! - **math**: Numeric primitives (evenly spaced fractions, probit, rescale, repair)
//! - **schedule**: The biased timestep generator, its config and errors
//! - **ffi**: Python bindings (behind the `pyo3` feature)
//!
//! # Critical Invariants
//!
//! 1. Output length == `num_steps`
//! 2. Every timestep lies in `[0, num_steps - 1]`
//! 3. Output is non-decreasing; positions are never reordered
//! 4. No randomness: same arguments → same schedule

// Module declarations
pub mod math;
pub mod schedule;

// Re-exports for convenience
pub use schedule::{
    get_biased_timesteps, BiasConfig, BiasedTimestepScheduler, ConfigError, ScheduleError,
    DEFAULT_MEAN, DEFAULT_SCALE,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn timestep_scheduler_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::scheduler::py_get_biased_timesteps, m)?)?;
    m.add_class::<ffi::scheduler::PyBiasedTimestepScheduler>()?;
    Ok(())
}
