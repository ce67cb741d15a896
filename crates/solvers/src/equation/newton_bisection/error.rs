use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::Point;

use super::{config::ConfigError, input::InputError};

/// Errors that can occur during Newton-bisection solving.
#[derive(Debug, Error)]
pub enum Error<T> {
    #[error("degenerate input: {0}")]
    DegenerateInput(#[from] InputError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("target {target} is not between f(low) = {range_at_low} and f(high) = {range_at_high}")]
    InvalidBracket {
        target: T,
        range_at_low: T,
        range_at_high: T,
    },

    #[error("no convergence after {iters} iterations, best residual {residual} at {best}")]
    NonConvergence {
        best: Point<T>,
        residual: T,
        iters: usize,
    },

    #[error("non-finite range value {range} at x = {domain}")]
    NonFiniteRange { domain: T, range: T },

    #[error("state evaluation failed")]
    Evaluation(#[source] Box<dyn StdError + Send + Sync>),
}
