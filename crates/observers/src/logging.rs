use inverse_core::{Observer, Scalar};
use inverse_solvers::equation::newton_bisection::Event;
use log::Level;

/// An observer that writes each solver iteration to the `log` facade.
///
/// It never returns an action, so it can be paired with any action type.
///
/// # Example
///
/// ```
/// use inverse_core::from_fns;
/// use inverse_observers::LogObserver;
/// use inverse_solvers::equation::{Point, newton_bisection::{Config, invert}};
///
/// let mut cosine = from_fns(|x: f64| x, |x: &f64| x.cos(), |x: &f64| -x.sin());
/// let low = Point::evaluate(&mut cosine, 0.0).unwrap();
/// let high = Point::evaluate(&mut cosine, std::f64::consts::PI).unwrap();
///
/// let solution = invert(cosine, 0.3, 1e-6, [low, high], &Config::default(), LogObserver::default())
///     .unwrap();
/// assert!((solution.point.range - 0.3).abs() <= 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<T: Scalar, S, A> Observer<Event<'_, T, S>, A> for LogObserver {
    fn observe(&mut self, event: &Event<'_, T, S>) -> Option<A> {
        let [low, high] = event.bracket.as_array();
        log::log!(
            self.level,
            "iter {}: {:?} to {}, residual {}, bracket [{low}, {high}]",
            event.iter,
            event.step,
            event.point,
            event.residual,
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use inverse_core::from_fns;
    use inverse_solvers::equation::{
        Point,
        newton_bisection::{Config, invert},
    };
    use log::{Log, Metadata, Record};

    /// Captures formatted messages at `Info` and above.
    struct Capture {
        lines: Mutex<Vec<String>>,
    }

    impl Log for Capture {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= Level::Info
        }

        fn log(&self, record: &Record<'_>) {
            if self.enabled(record.metadata()) {
                self.lines
                    .lock()
                    .expect("capture lock")
                    .push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture {
        lines: Mutex::new(Vec::new()),
    };

    #[test]
    fn logs_every_iteration() {
        log::set_logger(&CAPTURE).expect("only logger in this test binary");
        log::set_max_level(log::LevelFilter::Trace);

        let mut identity = from_fns(|x: f64| x, |x: &f64| *x, |_: &f64| 1.0);
        let low = Point::evaluate(&mut identity, 0.0).expect("infallible");
        let high = Point::evaluate(&mut identity, 1.0).expect("infallible");

        let solution = invert(
            identity,
            0.3,
            1e-6,
            [low, high],
            &Config::default(),
            LogObserver::new(Level::Info),
        )
        .expect("should converge");

        let lines = CAPTURE.lines.lock().expect("capture lock");
        assert_eq!(lines.len(), solution.iters);
        assert!(lines[0].starts_with("iter 1: Newton to x = 0.3"));
    }
}
