use inverse_core::Scalar;

use crate::equation::Point;

use super::{Error, Solution, Status};

/// Tracks the point with the smallest residual magnitude seen so far.
///
/// Seeded from the bracket endpoints, so a best point always exists.
pub(super) struct Best<T> {
    point: Point<T>,
    residual: T,
}

impl<T: Scalar> Best<T> {
    /// Creates a tracker holding a single point.
    pub(super) fn new(point: Point<T>, residual: T) -> Self {
        Self { point, residual }
    }

    /// Replaces the best point if `residual` is strictly smaller in magnitude.
    pub(super) fn update(&mut self, point: Point<T>, residual: T) {
        if residual.abs() < self.residual.abs() {
            self.point = point;
            self.residual = residual;
        }
    }

    /// Finishes the solve successfully with the best point.
    pub(super) fn finish(self, status: Status, iters: usize) -> Solution<T> {
        Solution::from_point(status, self.point, self.residual, iters)
    }

    /// Reports that the solve gave up, carrying the best point.
    pub(super) fn give_up(self, iters: usize) -> Error<T> {
        Error::NonConvergence {
            best: self.point,
            residual: self.residual,
            iters,
        }
    }
}
