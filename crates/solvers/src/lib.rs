//! Numerical solvers for inverting monotonic differentiable functions.
//!
//! # Modules
//!
//! - [`equation`] — finding the domain value that produces a target range value

pub mod equation;
