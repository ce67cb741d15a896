use inverse_core::Differentiable;

use super::Point;

/// The result of evaluating a function at a domain value.
///
/// The state is kept next to the point it produced so observers can inspect
/// it without triggering another evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation<T, S> {
    pub point: Point<T>,
    pub state: S,
}

/// Evaluates the state at `domain` and projects its range and derivative.
///
/// The state evaluator is called exactly once.
///
/// # Errors
///
/// Returns the function's error if the state cannot be evaluated.
pub fn evaluate<T, F>(function: &mut F, domain: T) -> Result<Evaluation<T, F::State>, F::Error>
where
    T: Copy,
    F: Differentiable<T>,
{
    let state = function.state(domain)?;
    let range = function.range(&state);
    let derivative = function.derivative(&state);

    Ok(Evaluation {
        point: Point::new(domain, range, derivative),
        state,
    })
}
