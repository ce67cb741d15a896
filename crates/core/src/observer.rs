/// Watches a solver's iterations and can steer it.
///
/// A solver hands every freshly evaluated point to its observer as an event
/// of type `E`. Returning `Some(action)` asks the solver to react, for
/// example by bisecting the bracket on the next step or by stopping with the
/// best point found so far. Returning `None` leaves the iteration untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is one that
/// never acts.
pub trait Observer<E, A> {
    /// Inspects one event and optionally returns an action for the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Signal {
        Halt,
    }

    fn drive<Obs: Observer<usize, Signal>>(mut observer: Obs, events: usize) -> Option<usize> {
        (1..=events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let mut seen = Vec::new();
        let observer = |event: &usize| {
            seen.push(*event);
            (*event == 3).then_some(Signal::Halt)
        };

        assert_eq!(drive(observer, 10), Some(3));
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
