//! Core traits and types for the Enclose workspace.
//!
//! This crate defines the shared abstractions that the root-isolation engine,
//! interval backends, and observers build on:
//!
//! - [`Interval`]: the capability set an interval type must expose to be
//!   driven by the engine (set operations, bisection, two-piece division)
//! - [`Quotient`]: the one-or-two-piece result of dividing by an interval
//! - [`Function`]: a user function paired with its derivative, both
//!   evaluated over intervals
//! - [`Observer`]: receives solver events and optionally returns control
//!   actions

mod function;
mod interval;
mod observer;

pub use function::{FnPair, Function};
pub use interval::{Interval, Quotient};
pub use observer::Observer;
