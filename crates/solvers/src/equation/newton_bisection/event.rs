use crate::equation::Point;

use super::{Bracket, Step};

/// Iteration event emitted by the Newton-bisection solver.
///
/// Emitted once per state evaluation, before the bracket is updated with the
/// new point.
#[derive(Debug)]
pub struct Event<'a, T, S> {
    /// Iteration counter (1-based), equal to the number of evaluations so far.
    pub iter: usize,

    /// The step that produced this point.
    pub step: Step,

    /// The newly evaluated point.
    pub point: Point<T>,

    /// Residual `f(x) - target` at the new point.
    pub residual: T,

    /// The bracket the step was taken in.
    pub bracket: &'a Bracket<T>,

    /// The evaluated state at the new point.
    pub state: &'a S,
}
