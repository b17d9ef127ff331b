//! Reusable observers for the enclose root isolation solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solver event types.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for solver-agnostic observers
//!   ([`HasCandidate`], [`HasProgress`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopAfter`]: stops the solver after a fixed number of events
//! - [`Trace`]: writes one `key=value` line per event to any [`io::Write`]
//!
//! [`Observer`]: enclose_core::Observer
//! [`HasCandidate`]: traits::HasCandidate
//! [`HasProgress`]: traits::HasProgress
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`io::Write`]: std::io::Write

mod stop_after;
mod trace;

pub mod traits;

pub use stop_after::StopAfter;
pub use trace::Trace;
