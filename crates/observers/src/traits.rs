//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once against the capabilities it needs.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanForceBisection`] — actions that can force a bisection step
//!
//! # Example
//!
//! ```rust
//! use inverse_core::Observer;
//! use inverse_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual<f64>, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use inverse_solvers::equation::newton_bisection;

/// An event that carries a residual value.
pub trait HasResidual<T> {
    /// Returns the residual `f(x) - target` for this event.
    fn residual(&self) -> T;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can request a bisection step.
pub trait CanForceBisection {
    /// Returns the action that forces the next step to bisect.
    fn force_bisection() -> Self;
}

impl<T: Copy, S> HasResidual<T> for newton_bisection::Event<'_, T, S> {
    fn residual(&self) -> T {
        self.residual
    }
}

impl CanStopEarly for newton_bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanForceBisection for newton_bisection::Action {
    fn force_bisection() -> Self {
        Self::ForceBisection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use inverse_core::{Observer, from_fns};
    use inverse_solvers::equation::{
        Point,
        newton_bisection::{Action, Config, Status, invert},
    };

    /// Stops as soon as the residual drops below a loose threshold.
    struct Loose(f64);

    impl<E: HasResidual<f64>, A: CanStopEarly> Observer<E, A> for Loose {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.0).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_solver() {
        let cosine = from_fns(|x: f64| x, |x: &f64| x.cos(), |x: &f64| -x.sin());
        let bracket = [Point::new(0.0, 1.0, 0.0), Point::new(PI, -1.0, 0.0)];

        let solution = invert(cosine, 0.3, 1e-12, bracket, &Config::default(), Loose(1e-2))
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.residual.abs() < 1e-2);
    }

    #[test]
    fn actions_map_to_solver_variants() {
        assert_eq!(Action::stop_early(), Action::StopEarly);
        assert_eq!(Action::force_bisection(), Action::ForceBisection);
    }
}
