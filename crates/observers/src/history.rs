use inverse_core::{Observer, Scalar};
use inverse_solvers::equation::{
    Point,
    newton_bisection::{Event, Step},
};

/// A snapshot of one solver iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<T> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The step that produced the point.
    pub step: Step,

    /// The evaluated point.
    pub point: Point<T>,

    /// Residual `f(x) - target` at the point.
    pub residual: T,

    /// The bracket `[low, high]` the step was taken in.
    pub bracket: [T; 2],
}

/// An observer that records every iteration in memory.
///
/// Pass `&mut history` to a solver to keep the records after it returns.
///
/// # Example
///
/// ```
/// use inverse_core::from_fns;
/// use inverse_observers::History;
/// use inverse_solvers::equation::{Point, newton_bisection::{Config, Step, invert}};
///
/// let mut cosine = from_fns(|x: f64| x, |x: &f64| x.cos(), |x: &f64| -x.sin());
/// let low = Point::evaluate(&mut cosine, 0.0).unwrap();
/// let high = Point::evaluate(&mut cosine, std::f64::consts::PI).unwrap();
///
/// let mut history = History::new();
/// let solution = invert(cosine, 0.3, 1e-6, [low, high], &Config::default(), &mut history)
///     .unwrap();
///
/// assert_eq!(history.len(), solution.iters);
/// assert!(matches!(history.records()[0].step, Step::Bisection(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    records: Vec<Record<T>>,
}

impl<T> History<T> {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[Record<T>] {
        &self.records
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the last recorded iteration, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record<T>> {
        self.records.last()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> History<T> {
    fn push<S>(&mut self, event: &Event<'_, T, S>) {
        self.records.push(Record {
            iter: event.iter,
            step: event.step,
            point: event.point,
            residual: event.residual,
            bracket: event.bracket.as_array(),
        });
    }
}

impl<T: Scalar, S, A> Observer<Event<'_, T, S>, A> for History<T> {
    fn observe(&mut self, event: &Event<'_, T, S>) -> Option<A> {
        self.push(event);
        None
    }
}

impl<T: Scalar, S, A> Observer<Event<'_, T, S>, A> for &mut History<T> {
    fn observe(&mut self, event: &Event<'_, T, S>) -> Option<A> {
        self.push(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use inverse_core::from_fns;
    use inverse_solvers::equation::newton_bisection::{Config, Fallback, invert};

    #[test]
    fn records_cosine_inversion() {
        let mut cosine = from_fns(|x: f64| x, |x: &f64| x.cos(), |x: &f64| -x.sin());
        let low = Point::evaluate(&mut cosine, 0.0).expect("infallible");
        let high = Point::evaluate(&mut cosine, PI).expect("infallible");

        let mut history = History::new();
        let solution = invert(
            cosine,
            0.3,
            1e-6,
            [low, high],
            &Config::default(),
            &mut history,
        )
        .expect("should converge");

        assert_eq!(history.len(), solution.iters);
        assert_eq!(
            history.records()[0].step,
            Step::Bisection(Fallback::ZeroDerivative)
        );
        assert_relative_eq!(history.records()[0].point.domain, PI / 2.0);

        let last = history.last().expect("at least one record");
        assert_eq!(last.point, solution.point);
        assert_relative_eq!(last.point.domain, 0.3_f64.acos(), epsilon = 1e-6);

        for (iter, record) in (1..).zip(history.records()) {
            let [low, high] = record.bracket;
            assert_eq!(record.iter, iter);
            assert!(low < record.point.domain && record.point.domain < high);
        }

        for pair in history.records().windows(2) {
            let width = |r: &Record<f64>| r.bracket[1] - r.bracket[0];
            assert!(width(&pair[1]) <= width(&pair[0]));
        }
    }

    #[test]
    fn starts_empty() {
        let history = History::<f32>::default();
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }
}
