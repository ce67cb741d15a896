use std::fmt::{Debug, Display};

use num_traits::Float;

/// A floating-point type the solvers can search over.
///
/// Precision limits are associated constants rather than globals, so an
/// `f32` search and an `f64` search each pick up their own.
pub trait Scalar: Float + Debug + Display {
    /// Number of significand bits, including the implicit leading bit.
    const MANTISSA_DIGITS: u32;

    /// The value `0.5`.
    const HALF: Self;

    /// Default iteration cap for bracketed searches.
    ///
    /// Bisection halves the bracket on every step, so a bracket of unit scale
    /// collapses to adjacent values well within twice the significand width.
    /// Wider brackets may need more iterations than this.
    #[must_use]
    fn default_max_iters() -> usize {
        2 * Self::MANTISSA_DIGITS as usize
    }

    /// Returns the midpoint of `a` and `b` without overflowing.
    #[must_use]
    fn midpoint(a: Self, b: Self) -> Self {
        a + (b - a) * Self::HALF
    }
}

impl Scalar for f32 {
    const MANTISSA_DIGITS: u32 = f32::MANTISSA_DIGITS;
    const HALF: Self = 0.5;
}

impl Scalar for f64 {
    const MANTISSA_DIGITS: u32 = f64::MANTISSA_DIGITS;
    const HALF: Self = 0.5;
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn max_iters_scale_with_precision() {
        assert_eq!(<f32 as Scalar>::default_max_iters(), 48);
        assert_eq!(<f64 as Scalar>::default_max_iters(), 106);
    }

    #[test]
    fn midpoint_of_large_values_is_finite() {
        let mid = <f64 as Scalar>::midpoint(f64::MAX, f64::MAX * 0.5);
        assert!(mid.is_finite());
        assert_relative_eq!(mid, f64::MAX * 0.75);
    }

    #[test]
    fn midpoint_of_adjacent_values_is_an_endpoint() {
        let a = 1.0_f64;
        let b = a + f64::EPSILON;
        let mid = <f64 as Scalar>::midpoint(a, b);
        assert!(mid == a || mid == b);
    }
}
