use std::fmt;

use inverse_core::{Differentiable, Scalar};

use super::evaluate;

/// A domain value with its range value and derivative.
///
/// Callers use points to hand precomputed bracket endpoints to a solver, and
/// solvers report their estimates as points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    /// The domain value.
    pub domain: T,

    /// The range value at `domain`.
    pub range: T,

    /// The derivative of the range value at `domain`.
    pub derivative: T,
}

impl<T> Point<T> {
    /// Creates a new point.
    #[must_use]
    pub fn new(domain: T, range: T, derivative: T) -> Self {
        Self {
            domain,
            range,
            derivative,
        }
    }
}

impl<T: Scalar> Point<T> {
    /// Evaluates `function` once at `domain` and keeps only the point.
    ///
    /// # Errors
    ///
    /// Returns the function's error if the state cannot be evaluated.
    pub fn evaluate<F>(function: &mut F, domain: T) -> Result<Self, F::Error>
    where
        F: Differentiable<T>,
    {
        evaluate(function, domain).map(|eval| eval.point)
    }

    /// Returns the residual `range - target`.
    #[must_use]
    pub fn residual(&self, target: T) -> T {
        self.range - target
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x = {}, f(x) = {}, f'(x) = {}",
            self.domain, self.range, self.derivative
        )
    }
}
