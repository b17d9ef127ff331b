//! Root-isolation solvers for the Enclose workspace.
//!
//! # Modules
//!
//! - [`equation`]: solvers that locate every root of a scalar equation inside
//!   a starting interval

pub mod equation;
