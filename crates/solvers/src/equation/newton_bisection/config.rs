use inverse_core::Scalar;
use thiserror::Error;

/// Configuration for the Newton-bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<T> {
    max_iters: usize,
    min_progress: T,
}

/// Errors that can occur when validating a Newton-bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_progress must be finite and strictly between 0 and 1")]
    MinProgress,
}

impl<T: Scalar> Default for Config<T> {
    /// Caps iterations at twice the significand width of `T`, enough for a
    /// unit-scale bracket to collapse, and requires each Newton step to at
    /// least halve the residual.
    fn default() -> Self {
        Self {
            max_iters: T::default_max_iters(),
            min_progress: T::HALF,
        }
    }
}

impl<T: Scalar> Config<T> {
    /// Creates a new config with a validated progress factor.
    ///
    /// After a Newton step, the next Newton proposal is only trusted if the
    /// residual magnitude shrank to at most `min_progress` times its previous
    /// value. Otherwise the solver bisects.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_progress` is not in the open interval `(0, 1)`.
    pub fn new(max_iters: usize, min_progress: T) -> Result<Self, ConfigError> {
        if !(min_progress > T::zero() && min_progress < T::one()) {
            return Err(ConfigError::MinProgress);
        }

        Ok(Self {
            max_iters,
            min_progress,
        })
    }

    /// Returns the maximum number of iterations (and state evaluations).
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the required residual reduction factor for Newton steps.
    #[must_use]
    pub fn min_progress(&self) -> T {
        self.min_progress
    }

    /// Returns a copy of this config with a different iteration cap.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_uses_precision_cap() {
        let config = Config::<f64>::default();
        assert_eq!(config.max_iters(), 106);
        assert_relative_eq!(config.min_progress(), 0.5);

        let config = Config::<f32>::default();
        assert_eq!(config.max_iters(), 48);
    }

    #[test]
    fn rejects_out_of_range_progress() {
        for factor in [0.0, 1.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(10, factor), Err(ConfigError::MinProgress));
        }
    }

    #[test]
    fn with_max_iters_keeps_progress() {
        let config = Config::new(10, 0.25).expect("valid").with_max_iters(3);
        assert_eq!(config.max_iters(), 3);
        assert_relative_eq!(config.min_progress(), 0.25);
    }
}
