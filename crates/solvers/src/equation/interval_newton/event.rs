use super::Refinement;

/// Iteration event emitted by the interval Newton solver.
///
/// One event is emitted per processed candidate, after its refinement has
/// been applied to the worklist and the result set.
#[derive(Debug)]
pub struct Event<'a, I> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The candidate popped from the worklist.
    pub candidate: I,

    /// What the solver decided for the candidate.
    pub refinement: &'a Refinement<I>,

    /// Candidates still waiting on the worklist.
    pub pending: &'a [I],

    /// Root enclosures accepted so far.
    pub roots: &'a [I],
}
