/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The worklist was exhausted; every root is enclosed by `roots`.
    Converged,

    /// Reached the iteration limit with candidates still pending.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an interval Newton root isolation.
///
/// Every root of the function inside the initial interval lies in one of
/// `roots` or, if the solver stopped before the worklist was exhausted, in
/// one of `pending`.
#[derive(Debug, Clone)]
pub struct Solution<I> {
    /// Final solver status.
    pub status: Status,

    /// Accepted root enclosures in discovery order, pairwise disjoint.
    ///
    /// Each enclosure is narrower than [`Config::max_width`], except where
    /// a root sits on a bisection point: both halves then enclose it, and
    /// their merged hull may be up to twice `max_width` wide.
    ///
    /// [`Config::max_width`]: super::Config::max_width
    pub roots: Vec<I>,

    /// Candidates left unresolved on the worklist.
    pub pending: Vec<I>,

    /// Number of candidates processed.
    pub iters: usize,
}

impl<I> Solution<I> {
    /// Returns true if the worklist was exhausted, so `roots` encloses every
    /// root of the initial interval.
    ///
    /// A run stopped by the iteration limit or an observer may have roots
    /// that are only enclosed by `pending`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Converged
    }
}
