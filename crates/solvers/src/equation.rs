//! Solvers for scalar equations: enclosing every root of `f(x) = 0`.
//!
//! A [`Function`] supplies interval enclosures of `f` and `f'`. Solvers in
//! this module search a bounded starting interval and return intervals that
//! each enclose a root.
//!
//! # Solvers
//!
//! - [`interval_newton`]: branch-and-prune interval Newton with bisection
//!   fallback
//!
//! [`Function`]: enclose_core::Function

pub mod interval_newton;
