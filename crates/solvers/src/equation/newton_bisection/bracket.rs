use inverse_core::Scalar;

use crate::equation::Point;

/// The current search interval and the range values at its ends.
///
/// The target always lies between `range_at_low` and `range_at_high`
/// (inclusive), so under monotonicity the answer is inside `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    low: T,
    high: T,
    range_at_low: T,
    range_at_high: T,
    low_sign: Sign,
}

impl<T: Scalar> Bracket<T> {
    /// Creates a bracket from ordered endpoints.
    ///
    /// Returns `None` if the target is not between the endpoint range values.
    pub(super) fn new(low: &Point<T>, high: &Point<T>, target: T) -> Option<Self> {
        let low_residual = low.residual(target);
        let high_residual = high.residual(target);

        let same_side = (low_residual > T::zero() && high_residual > T::zero())
            || (low_residual < T::zero() && high_residual < T::zero());
        if same_side {
            return None;
        }

        Some(Self {
            low: low.domain,
            high: high.domain,
            range_at_low: low.range,
            range_at_high: high.range,
            low_sign: Sign::of(low_residual),
        })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn low(&self) -> T {
        self.low
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn high(&self) -> T {
        self.high
    }

    /// Returns the range value at the lower bound.
    #[must_use]
    pub fn range_at_low(&self) -> T {
        self.range_at_low
    }

    /// Returns the range value at the upper bound.
    #[must_use]
    pub fn range_at_high(&self) -> T {
        self.range_at_high
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [T; 2] {
        [self.low, self.high]
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> T {
        self.high - self.low
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> T {
        T::midpoint(self.low, self.high)
    }

    /// Returns true if `x` lies strictly between the bounds.
    ///
    /// Always false for NaN.
    #[must_use]
    pub fn strictly_contains(&self, x: T) -> bool {
        self.low < x && x < self.high
    }

    /// Replaces the endpoint whose residual has the same sign as `point`'s.
    ///
    /// `point.domain` must lie inside the bracket.
    pub(super) fn shrink(&mut self, point: &Point<T>, residual: T) {
        if Sign::of(residual) == self.low_sign {
            self.low = point.domain;
            self.range_at_low = point.range;
        } else {
            self.high = point.domain;
            self.range_at_high = point.range;
        }
    }
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    fn of<T: Scalar>(value: T) -> Self {
        if value >= T::zero() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Endpoint of the identity function.
    fn at(x: f64) -> Point<f64> {
        Point::new(x, x, 1.0)
    }

    #[test]
    fn rejects_target_outside_ranges() {
        assert!(Bracket::new(&at(0.0), &at(1.0), 1.5).is_none());
        assert!(Bracket::new(&at(0.0), &at(1.0), -0.5).is_none());
    }

    #[test]
    fn accepts_target_on_an_endpoint() {
        assert!(Bracket::new(&at(0.0), &at(1.0), 0.0).is_some());
        assert!(Bracket::new(&at(0.0), &at(1.0), 1.0).is_some());
    }

    #[test]
    fn accepts_decreasing_functions() {
        let low = Point::new(0.0, 1.0, 0.0);
        let high = Point::new(std::f64::consts::PI, -1.0, 0.0);
        let bracket = Bracket::new(&low, &high, 0.3).expect("straddles target");

        assert_relative_eq!(bracket.range_at_low(), 1.0);
        assert_relative_eq!(bracket.range_at_high(), -1.0);
    }

    #[test]
    fn tiny_residuals_of_the_same_sign_are_rejected() {
        // The product of these residuals underflows to zero.
        let low = Point::new(0.0, 1e-200, 1.0);
        let high = Point::new(1.0, 2e-200, 1.0);
        assert!(Bracket::new(&low, &high, 0.0).is_none());
    }

    #[test]
    fn shrink_replaces_matching_endpoint() {
        let mut bracket = Bracket::new(&at(0.0), &at(2.0), 1.25).expect("valid bracket");

        bracket.shrink(&at(1.0), 1.0 - 1.25);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);
        assert_relative_eq!(bracket.range_at_low(), 1.0);

        bracket.shrink(&at(1.5), 1.5 - 1.25);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
        assert_relative_eq!(bracket.range_at_high(), 1.5);
        assert_relative_eq!(bracket.width(), 0.5);
        assert_relative_eq!(bracket.midpoint(), 1.25);
    }

    #[test]
    fn shrink_handles_decreasing_functions() {
        let low = Point::new(0.0, 1.0, -1.0);
        let high = Point::new(1.0, 0.0, -1.0);
        let mut bracket = Bracket::new(&low, &high, 0.3).expect("valid bracket");

        // f(0.5) = 0.5 is above the target, like f(low).
        bracket.shrink(&Point::new(0.5, 0.5, -1.0), 0.2);
        assert_eq!(bracket.as_array(), [0.5, 1.0]);
    }

    #[test]
    fn strictly_contains_excludes_bounds_and_nan() {
        let bracket = Bracket::new(&at(0.0), &at(1.0), 0.5).expect("valid bracket");

        assert!(bracket.strictly_contains(0.5));
        assert!(!bracket.strictly_contains(0.0));
        assert!(!bracket.strictly_contains(1.0));
        assert!(!bracket.strictly_contains(f64::NAN));
    }
}
