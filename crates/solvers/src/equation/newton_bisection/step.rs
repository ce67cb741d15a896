use inverse_core::Scalar;

use crate::equation::Point;

use super::Bracket;

/// The kind of step that produced an evaluated point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A Newton step from the previous iterate.
    Newton,

    /// A bisection step at the bracket midpoint, with the reason Newton was
    /// rejected.
    Bisection(Fallback),
}

/// Why a Newton step was rejected in favor of bisection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The derivative at the iterate is exactly zero.
    ZeroDerivative,

    /// The derivative at the iterate is NaN or infinite.
    NonFiniteDerivative,

    /// The Newton step does not land strictly inside the bracket.
    OutsideBracket,

    /// The previous Newton step did not shrink the residual enough.
    SlowProgress,

    /// An observer requested a bisection step.
    Forced,
}

/// A candidate domain value and the step that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Proposal<T> {
    pub(super) domain: T,
    pub(super) step: Step,
}

/// Proposes the next domain value to evaluate.
///
/// The Newton step `x - residual / f'(x)` is accepted when the derivative is
/// finite and nonzero, the step lands strictly inside the bracket, and
/// `distrust` is `None`. Otherwise the bracket midpoint is proposed.
pub(super) fn propose<T: Scalar>(
    iterate: &Point<T>,
    residual: T,
    bracket: &Bracket<T>,
    distrust: Option<Fallback>,
) -> Proposal<T> {
    let bisect = |reason| Proposal {
        domain: bracket.midpoint(),
        step: Step::Bisection(reason),
    };

    let derivative = iterate.derivative;
    if !derivative.is_finite() {
        return bisect(Fallback::NonFiniteDerivative);
    }
    if derivative.is_zero() {
        return bisect(Fallback::ZeroDerivative);
    }

    let newton = iterate.domain - residual / derivative;
    if !bracket.strictly_contains(newton) {
        return bisect(Fallback::OutsideBracket);
    }

    match distrust {
        Some(reason) => bisect(reason),
        None => Proposal {
            domain: newton,
            step: Step::Newton,
        },
    }
}

/// Returns the fallback the next proposal must honor after a Newton step.
///
/// A Newton step that left more than `min_progress` of the previous residual
/// magnitude is not trusted for the next iteration.
pub(super) fn progress_check<T: Scalar>(
    previous_residual: T,
    residual: T,
    min_progress: T,
) -> Option<Fallback> {
    if residual.abs() > min_progress * previous_residual.abs() {
        Some(Fallback::SlowProgress)
    } else {
        None
    }
}
