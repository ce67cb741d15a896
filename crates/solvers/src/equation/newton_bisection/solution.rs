use crate::equation::Point;

/// Indicates how a successful solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual is within tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    /// Final solver status.
    pub status: Status,

    /// The reported point: domain value, range value, and derivative.
    pub point: Point<T>,

    /// Residual `f(x) - target` at the reported point.
    pub residual: T,

    /// Iteration count when the solver finished.
    ///
    /// Each iteration evaluates the state exactly once, so this is also the
    /// number of evaluations made by the solver.
    pub iters: usize,
}

impl<T> Solution<T> {
    /// Constructs a solution reporting `point`.
    pub(super) fn from_point(status: Status, point: Point<T>, residual: T, iters: usize) -> Self {
        Self {
            status,
            point,
            residual,
            iters,
        }
    }
}
