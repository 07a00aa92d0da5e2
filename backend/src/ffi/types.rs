//! Type conversion utilities for FFI boundary
//!
//! Converts Python dicts into Rust config types and Rust errors into
//! Python exceptions.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::schedule::{BiasConfig, ScheduleError, DEFAULT_MEAN, DEFAULT_SCALE};

/// Convert a schedule error into a Python `ValueError`
pub fn schedule_error_to_py(err: ScheduleError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Extract an optional field from a Python dict.
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
fn extract_optional<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: for<'py> FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => Ok(Some(value.extract()?)),
        None => Ok(None),
    }
}

/// Extract a field that may appear under a long or short key, with a default.
///
/// # Errors
/// Returns PyValueError if both keys are present, or if type conversion fails
fn extract_aliased_with_default<T>(
    dict: &Bound<'_, PyDict>,
    key: &str,
    alias: &str,
    default: T,
) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    match (extract_optional(dict, key)?, extract_optional(dict, alias)?) {
        (Some(_), Some(_)) => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Fields '{}' and '{}' are aliases; pass only one",
            key, alias
        ))),
        (Some(value), None) | (None, Some(value)) => Ok(value),
        (None, None) => Ok(default),
    }
}

/// Convert Python dict to BiasConfig
///
/// Accepts `mean`/`m` and `scale`/`s`; missing fields take the defaults.
///
/// # Errors
///
/// Returns PyErr if:
/// - Unknown fields are present
/// - Type conversions fail
/// - Values fail `BiasConfig::validate`
pub fn parse_bias_config(py_config: &Bound<'_, PyDict>) -> PyResult<BiasConfig> {
    for key in py_config.keys() {
        let key: String = key.extract()?;
        if !matches!(key.as_str(), "mean" | "m" | "scale" | "s") {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Unknown bias config field '{}'",
                key
            )));
        }
    }

    let mean: f64 = extract_aliased_with_default(py_config, "mean", "m", DEFAULT_MEAN)?;
    let scale: f64 = extract_aliased_with_default(py_config, "scale", "s", DEFAULT_SCALE)?;

    BiasConfig::new(mean, scale).map_err(schedule_error_to_py)
}
