//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and attached to any solver that exposes the
//! capability.
//!
//! # Event traits
//!
//! - [`HasCandidate`]: events that carry the candidate being processed
//! - [`HasProgress`]: events that report the worklist and result set sizes
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use enclose_core::Observer;
//! use enclose_observers::traits::{CanStopEarly, HasProgress};
//!
//! /// Stops as soon as `wanted` roots have been accepted.
//! struct FoundEnough {
//!     wanted: usize,
//! }
//!
//! impl<E: HasProgress, A: CanStopEarly> Observer<E, A> for FoundEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.roots_found() >= self.wanted).then(A::stop_early)
//!     }
//! }
//! ```

use std::fmt::Display;

use enclose_core::Interval;
use enclose_solvers::equation::interval_newton;

/// An event that carries the candidate interval being processed.
pub trait HasCandidate {
    type Candidate: Display;

    /// Returns the 1-based iteration that produced this event.
    fn iter(&self) -> usize;

    /// Returns the candidate processed in this iteration.
    fn candidate(&self) -> &Self::Candidate;
}

/// An event that reports how far the search has progressed.
pub trait HasProgress {
    /// Returns the number of candidates still waiting to be processed.
    fn pending(&self) -> usize;

    /// Returns the number of root enclosures accepted so far.
    fn roots_found(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- interval_newton::Event ---

impl<I> HasCandidate for interval_newton::Event<'_, I>
where
    I: Interval + Display,
{
    type Candidate = I;

    fn iter(&self) -> usize {
        self.iter
    }

    fn candidate(&self) -> &I {
        &self.candidate
    }
}

impl<I: Interval> HasProgress for interval_newton::Event<'_, I> {
    fn pending(&self) -> usize {
        self.pending.len()
    }

    fn roots_found(&self) -> usize {
        self.roots.len()
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for interval_newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
