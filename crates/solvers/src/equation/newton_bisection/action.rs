/// Control actions supported by the Newton-bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best point found so far.
    StopEarly,

    /// Take a bisection step next, even if the Newton step would be accepted.
    ///
    /// Useful for steering away from a region where the caller knows the
    /// derivative is unreliable.
    ForceBisection,
}
