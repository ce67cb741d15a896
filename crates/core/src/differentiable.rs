use std::convert::Infallible;

/// A function from a domain value to a range value, split into a state
/// evaluator and two projections of that state.
///
/// [`state`](Differentiable::state) is the expensive, possibly side-effecting
/// step. Solvers call it once per candidate domain value and then derive both
/// the range value and the derivative from the same state, so implementors
/// can memoize, count, or dispatch evaluations however they like.
///
/// Solvers take the function by value; `&mut F` also implements the trait, so
/// callers that need the evaluator afterwards can pass a mutable reference.
pub trait Differentiable<T> {
    /// Opaque result of evaluating the function at a domain value.
    type State;

    /// Error returned when the state cannot be evaluated.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the state at a domain value.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be computed.
    fn state(&mut self, domain: T) -> Result<Self::State, Self::Error>;

    /// Returns the range value for an evaluated state.
    fn range(&self, state: &Self::State) -> T;

    /// Returns the derivative of the range value with respect to the domain
    /// value for an evaluated state.
    fn derivative(&self, state: &Self::State) -> T;
}

impl<T, F> Differentiable<T> for &mut F
where
    F: Differentiable<T> + ?Sized,
{
    type State = F::State;
    type Error = F::Error;

    fn state(&mut self, domain: T) -> Result<Self::State, Self::Error> {
        (**self).state(domain)
    }

    fn range(&self, state: &Self::State) -> T {
        (**self).range(state)
    }

    fn derivative(&self, state: &Self::State) -> T {
        (**self).derivative(state)
    }
}

/// A [`Differentiable`] built from three infallible closures.
///
/// Construct with [`from_fns`].
#[derive(Debug, Clone, Copy)]
pub struct FnDifferentiable<S, R, D> {
    state_of: S,
    range_of: R,
    derivative_of: D,
}

/// Builds a [`Differentiable`] from a state evaluator and its projections.
///
/// # Example
///
/// ```
/// use inverse_core::{Differentiable, from_fns};
///
/// let mut cosine = from_fns(|x: f64| x, |x: &f64| x.cos(), |x: &f64| -x.sin());
///
/// let state = cosine.state(0.0).unwrap();
/// assert_eq!(cosine.range(&state), 1.0);
/// assert_eq!(cosine.derivative(&state), 0.0);
/// ```
pub fn from_fns<T, St, S, R, D>(
    state_of: S,
    range_of: R,
    derivative_of: D,
) -> FnDifferentiable<S, R, D>
where
    S: FnMut(T) -> St,
    R: Fn(&St) -> T,
    D: Fn(&St) -> T,
{
    FnDifferentiable {
        state_of,
        range_of,
        derivative_of,
    }
}

impl<T, St, S, R, D> Differentiable<T> for FnDifferentiable<S, R, D>
where
    S: FnMut(T) -> St,
    R: Fn(&St) -> T,
    D: Fn(&St) -> T,
{
    type State = St;
    type Error = Infallible;

    fn state(&mut self, domain: T) -> Result<St, Infallible> {
        Ok((self.state_of)(domain))
    }

    fn range(&self, state: &St) -> T {
        (self.range_of)(state)
    }

    fn derivative(&self, state: &St) -> T {
        (self.derivative_of)(state)
    }
}

/// A [`Differentiable`] whose state evaluator returns a `Result`.
///
/// Construct with [`try_from_fns`].
#[derive(Debug, Clone, Copy)]
pub struct TryFnDifferentiable<S, R, D> {
    state_of: S,
    range_of: R,
    derivative_of: D,
}

/// Builds a [`Differentiable`] from a fallible state evaluator and its
/// projections.
pub fn try_from_fns<T, St, E, S, R, D>(
    state_of: S,
    range_of: R,
    derivative_of: D,
) -> TryFnDifferentiable<S, R, D>
where
    S: FnMut(T) -> Result<St, E>,
    R: Fn(&St) -> T,
    D: Fn(&St) -> T,
    E: std::error::Error + Send + Sync + 'static,
{
    TryFnDifferentiable {
        state_of,
        range_of,
        derivative_of,
    }
}

impl<T, St, E, S, R, D> Differentiable<T> for TryFnDifferentiable<S, R, D>
where
    S: FnMut(T) -> Result<St, E>,
    R: Fn(&St) -> T,
    D: Fn(&St) -> T,
    E: std::error::Error + Send + Sync + 'static,
{
    type State = St;
    type Error = E;

    fn state(&mut self, domain: T) -> Result<St, E> {
        (self.state_of)(domain)
    }

    fn range(&self, state: &St) -> T {
        (self.range_of)(state)
    }

    fn derivative(&self, state: &St) -> T {
        (self.derivative_of)(state)
    }
}
