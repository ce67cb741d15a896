//! Newton's method safeguarded by bisection, for inverting monotonic
//! differentiable functions on a bracketed interval.
//!
//! # Algorithm
//!
//! Given `f` on `[low, high]` with `target` between `f(low)` and `f(high)`,
//! the solver keeps a bracket whose endpoint range values straddle the target.
//! Each iteration proposes a Newton step `x - (f(x) - target) / f'(x)` from the
//! current iterate and falls back to the bracket midpoint when:
//!
//! - `f'(x)` is zero or non-finite,
//! - the Newton step does not land strictly inside the bracket, or
//! - the previous Newton step failed to shrink `|f(x) - target|` to at most
//!   [`Config::min_progress`] times its prior value.
//!
//! The proposal is evaluated once, the bracket endpoint on the same side of
//! the target is replaced, and the search stops when
//! `|f(x) - target| <= tolerance`.
//!
//! # Evaluations
//!
//! The caller supplies both endpoints as [`Point`]s, typically built with
//! [`Point::evaluate`], so their states are never recomputed. The solver
//! starts from the low endpoint and evaluates exactly one state per
//! iteration; rejected Newton proposals cost nothing.
//!
//! # Failure
//!
//! Hitting [`Config::max_iters`], or narrowing the bracket to adjacent
//! floating-point values, returns [`Error::NonConvergence`] with the best
//! point found. An under-converged estimate is never reported as success.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation. Observers can return
//! [`Action::StopEarly`] to halt with the best point so far, or
//! [`Action::ForceBisection`] to make the next step a bisection.

mod action;
mod best;
mod bracket;
mod config;
mod error;
mod event;
mod input;
mod solution;
mod step;


pub use action::Action;
pub use bracket::Bracket;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use input::InputError;
pub use solution::{Solution, Status};
pub use step::{Fallback, Step};

use inverse_core::{Differentiable, Observer, Scalar};
use log::{debug, trace};

use crate::equation::{Point, evaluate};

use best::Best;
use step::{progress_check, propose};

/// Finds the domain value where `function` reaches `target`.
///
/// `bracket` holds the precomputed `[low, high]` endpoints. The observer
/// receives an [`Event`] after each evaluation.
/// See the [module docs](self) for details on step selection and termination.
///
/// # Errors
///
/// Returns an error if the input is degenerate, the target is not bracketed,
/// an evaluation fails or yields a non-finite range value, or the solver does
/// not converge.
pub fn invert<T, F, Obs>(
    mut function: F,
    target: T,
    tolerance: T,
    bracket: [Point<T>; 2],
    config: &Config<T>,
    mut observer: Obs,
) -> Result<Solution<T>, Error<T>>
where
    T: Scalar,
    F: Differentiable<T>,
    Obs: for<'a> Observer<Event<'a, T, F::State>, Action>,
{
    let [low, high] = bracket;
    input::validate(target, tolerance, &low, &high)?;

    let mut bracket = Bracket::new(&low, &high, target).ok_or(Error::InvalidBracket {
        target,
        range_at_low: low.range,
        range_at_high: high.range,
    })?;

    debug!(
        "inverting to target {target} on [{}, {}] with tolerance {tolerance}",
        low.domain, high.domain
    );

    let low_residual = low.residual(target);
    if low_residual.abs() <= tolerance {
        debug!("low endpoint already within tolerance");
        return Ok(Solution::from_point(Status::Converged, low, low_residual, 0));
    }
    let high_residual = high.residual(target);
    if high_residual.abs() <= tolerance {
        debug!("high endpoint already within tolerance");
        return Ok(Solution::from_point(Status::Converged, high, high_residual, 0));
    }

    let mut best = Best::new(low, low_residual);
    best.update(high, high_residual);

    let mut iterate = low;
    let mut residual = low_residual;
    let mut distrust = None;

    for iter in 1..=config.max_iters() {
        let proposal = propose(&iterate, residual, &bracket, distrust);
        if !bracket.strictly_contains(proposal.domain) {
            debug!(
                "bracket [{}, {}] cannot be split further",
                bracket.low(),
                bracket.high()
            );
            return Err(best.give_up(iter - 1));
        }

        let eval = evaluate(&mut function, proposal.domain)
            .map_err(|error| Error::Evaluation(Box::new(error)))?;
        let point = eval.point;
        if !point.range.is_finite() {
            return Err(Error::NonFiniteRange {
                domain: point.domain,
                range: point.range,
            });
        }
        let point_residual = point.residual(target);

        trace!(
            "iter {iter}: {:?} to {point}, residual {point_residual}, bracket [{}, {}]",
            proposal.step,
            bracket.low(),
            bracket.high()
        );

        let event = Event {
            iter,
            step: proposal.step,
            point,
            residual: point_residual,
            bracket: &bracket,
            state: &eval.state,
        };
        let action = observer.observe(&event);

        best.update(point, point_residual);

        if action == Some(Action::StopEarly) {
            debug!("stopped by observer after {iter} iterations");
            return Ok(best.finish(Status::StoppedByObserver, iter));
        }

        if point_residual.abs() <= tolerance {
            debug!("converged after {iter} iterations at {point}");
            return Ok(Solution::from_point(Status::Converged, point, point_residual, iter));
        }

        distrust = match (action, proposal.step) {
            (Some(Action::ForceBisection), _) => Some(Fallback::Forced),
            (_, Step::Newton) => progress_check(residual, point_residual, config.min_progress()),
            (_, Step::Bisection(_)) => None,
        };

        bracket.shrink(&point, point_residual);
        iterate = point;
        residual = point_residual;
    }

    debug!("reached iteration limit of {}", config.max_iters());
    Err(best.give_up(config.max_iters()))
}

/// Runs [`invert`] without observation.
///
/// # Errors
///
/// Returns an error if the input is degenerate, the target is not bracketed,
/// an evaluation fails or yields a non-finite range value, or the solver does
/// not converge.
pub fn invert_unobserved<T, F>(
    function: F,
    target: T,
    tolerance: T,
    bracket: [Point<T>; 2],
    config: &Config<T>,
) -> Result<Solution<T>, Error<T>>
where
    T: Scalar,
    F: Differentiable<T>,
{
    invert(function, target, tolerance, bracket, config, ())
}
