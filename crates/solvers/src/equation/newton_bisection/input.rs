use inverse_core::Scalar;
use thiserror::Error;

use crate::equation::Point;

/// Reasons a search is rejected before any evaluation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("target must be finite")]
    NonFiniteTarget,

    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("endpoint domain and range values must be finite")]
    NonFiniteEndpoint,

    #[error("low endpoint must be strictly below high endpoint")]
    UnorderedEndpoints,
}

/// Validates the target, tolerance, and endpoints of a search.
///
/// Endpoint derivatives are not checked: a non-finite derivative only rules
/// out a Newton step from that point.
pub(super) fn validate<T: Scalar>(
    target: T,
    tolerance: T,
    low: &Point<T>,
    high: &Point<T>,
) -> Result<(), InputError> {
    if !target.is_finite() {
        return Err(InputError::NonFiniteTarget);
    }
    if !tolerance.is_finite() || tolerance <= T::zero() {
        return Err(InputError::Tolerance);
    }

    let finite = |point: &Point<T>| point.domain.is_finite() && point.range.is_finite();
    if !finite(low) || !finite(high) {
        return Err(InputError::NonFiniteEndpoint);
    }

    if low.domain >= high.domain {
        return Err(InputError::UnorderedEndpoints);
    }

    Ok(())
}
