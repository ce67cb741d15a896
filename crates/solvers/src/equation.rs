//! Solvers for scalar equations of the form `f(x) = target`.
//!
//! A [`Differentiable`] maps a domain value to an opaque state, from which it
//! projects the range value and its derivative. Solvers in this module drive
//! the residual `f(x) - target` toward zero.
//!
//! # Solvers
//!
//! - [`newton_bisection`] — Newton's method safeguarded by bisection on a
//!   bracketed interval
//!
//! [`Differentiable`]: inverse_core::Differentiable

mod evaluate;
mod point;

pub use evaluate::{Evaluation, evaluate};
pub use point::Point;

pub mod newton_bisection;
