//! Logit-normal biased timestep schedule
//!
//! Maps a diffusion horizon `T` to a monotonic ordering of timesteps in
//! `[0, T - 1]` that concentrates toward the middle of the range.

pub mod config;
pub mod error;
pub mod generator;

pub use config::{BiasConfig, ConfigError, DEFAULT_MEAN, DEFAULT_SCALE};
pub use error::ScheduleError;
pub use generator::{get_biased_timesteps, BiasedTimestepScheduler};
