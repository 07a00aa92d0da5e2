//! Numeric primitives for the timestep generator
//!
//! Whole-sequence operations (evenly spaced fractions, clipping, rescaling,
//! rounding, monotonic repair) live in `sequence`; the standard normal
//! quantile lives in `normal`.
//!
//! CRITICAL: Every function here is pure. Same input → same output, no
//! randomness, no global state.

mod normal;
mod sequence;

pub use normal::{probit, EPSILON};
pub use sequence::{
    clip_unit_interval, forward_fill_monotone, linspace_unit, rescale_to_range, round_and_clamp,
};
