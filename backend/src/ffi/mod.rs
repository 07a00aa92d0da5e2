//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the timestep generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: One function and one class
//! 2. **Simple types**: ints, floats, dicts and lists at the boundary
//! 3. **Safe errors**: Every Rust error becomes a Python `ValueError`
//! 4. **No references**: Python gets copies of the schedule

pub mod scheduler;
pub mod types;
