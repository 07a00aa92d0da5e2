//! Error types for the timestep generator

use thiserror::Error;

/// Errors that can occur when generating a biased timestep schedule
///
/// There is exactly one failure kind: the caller supplied an argument for
/// which the transform is not defined. No partial schedule is ever returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl ScheduleError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = ScheduleError::invalid("num_steps", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'num_steps': must be at least 1, got 0"
        );
    }
}
