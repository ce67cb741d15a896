//! Core traits for inverting monotonic differentiable functions.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Scalar`] — a floating-point type with per-type precision constants
//! - [`Differentiable`] — a state evaluator with range and derivative
//!   projections, plus the [`from_fns`] and [`try_from_fns`] closure adapters
//! - [`Observer`] — receives solver events and optionally returns control actions

mod differentiable;
mod observer;
mod scalar;

pub use differentiable::{
    Differentiable, FnDifferentiable, TryFnDifferentiable, from_fns, try_from_fns,
};
pub use observer::Observer;
pub use scalar::Scalar;
