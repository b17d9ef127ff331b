use enclose_core::Observer;

use crate::traits::CanStopEarly;

/// Stops the solver once it has emitted `limit` events.
///
/// Unlike a solver's own iteration limit, this reports
/// `StoppedByObserver`, which lets a caller cap one run without building a
/// new config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    limit: usize,
    seen: usize,
}

impl StopAfter {
    /// Creates an observer that stops after `limit` events.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, seen: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.limit).then(A::stop_early)
    }
}
