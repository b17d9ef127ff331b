use enclose_core::Interval;

use super::Tolerances;

/// What happens to one candidate produced by a refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Move<I> {
    /// The candidate is narrow enough and joins the result set.
    Accept(I),

    /// The candidate goes back onto the worklist.
    Requeue(I),
}

impl<I> Move<I> {
    /// Returns the interval carried by this move.
    pub fn interval(&self) -> &I {
        match self {
            Self::Accept(x) | Self::Requeue(x) => x,
        }
    }
}

/// The decisions taken for one popped candidate.
///
/// No moves means the candidate was proven root-free and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Refinement<I> {
    moves: Vec<Move<I>>,
    bisected: bool,
}

impl<I> Refinement<I> {
    /// A refinement that discards the candidate.
    pub(super) fn discarded() -> Self {
        Self {
            moves: Vec::new(),
            bisected: false,
        }
    }

    /// Returns the moves in the order they are applied.
    #[must_use]
    pub fn moves(&self) -> &[Move<I>] {
        &self.moves
    }

    /// Returns true if the candidate was proven root-free.
    #[must_use]
    pub fn is_discarded(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns true if the Newton step stalled and the candidate was bisected.
    #[must_use]
    pub fn is_bisected(&self) -> bool {
        self.bisected
    }

    /// Returns the candidates accepted as root enclosures.
    pub fn accepted(&self) -> impl Iterator<Item = &I> {
        self.moves.iter().filter_map(|m| match m {
            Move::Accept(x) => Some(x),
            Move::Requeue(_) => None,
        })
    }

    pub(super) fn requeue(&mut self, candidate: I) {
        self.moves.push(Move::Requeue(candidate));
    }

    pub(super) fn mark_bisected(&mut self) {
        self.bisected = true;
    }
}

impl<I: Interval> Refinement<I> {
    /// Accepts `candidate` if it is narrow enough, otherwise requeues it.
    pub(super) fn settle(&mut self, candidate: I, tol: &Tolerances<I>) {
        if tol.is_converged(&candidate) {
            self.moves.push(Move::Accept(candidate));
        } else {
            self.requeue(candidate);
        }
    }
}
