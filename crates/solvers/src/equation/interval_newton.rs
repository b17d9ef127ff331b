//! Interval Newton root isolation with bisection fallback.
//!
//! # Algorithm
//!
//! The solver keeps a worklist of candidate intervals, starting with the
//! initial interval. For each popped candidate `x` it evaluates `f` at the
//! midpoint `m` and `f'` over `x`, then applies the interval Newton operator
//! `m - f(m) / f'(x)`. Division by a derivative enclosure that contains zero
//! splits into two pieces, so one step can yield two candidates.
//!
//! Pieces that miss `x`, or whose image under `f` excludes zero, are proven
//! root-free and discarded. A surviving candidate narrower than
//! [`Config::max_width`] is accepted as a root enclosure. When a Newton step
//! fails to shrink `x` below [`Config::alpha`] times its width, `x` is bisected
//! instead. Everything else goes back onto the worklist.
//!
//! Discarding only happens on proof, so no root inside the initial interval
//! is ever lost. The accepted enclosures are pairwise disjoint, and each one
//! lies inside the initial interval.
//!
//! # Variants
//!
//! Two policies implement the per-candidate step and produce the same root
//! set:
//!
//! - [`Flagged`]: holds the optional second candidate in an `Option`
//! - [`Sentinel`]: always holds a second interval, using the empty interval
//!   when there is none
//!
//! # Termination
//!
//! A function with infinitely many sign changes below the tolerance can keep
//! the worklist busy forever. [`Config::max_iters`] bounds the run; hitting
//! it returns [`Status::MaxIters`] with the unresolved candidates in
//! [`Solution::pending`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per processed candidate, after the
//! candidate's [`Refinement`] has been applied. Observers can return
//! [`Action::StopEarly`] to halt.
//!
//! # Example
//!
//! ```
//! use enclose_core::{FnPair, Interval};
//! use enclose_interval::F64Interval;
//! use enclose_solvers::equation::interval_newton::{self, Config, Sentinel, Status};
//!
//! // x^2 - 2 has roots at -sqrt(2) and sqrt(2).
//! let f = FnPair::new(|x: &F64Interval| x.sqr() - 2.0, |x: &F64Interval| 2.0 * *x);
//! let initial = F64Interval::new(-3.0, 3.0).unwrap();
//!
//! let solution =
//!     interval_newton::isolate_unobserved(&f, initial, &Config::default(), &Sentinel).unwrap();
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert_eq!(solution.roots.len(), 2);
//! assert!(solution.roots.iter().any(|r| r.contains(2.0_f64.sqrt())));
//! ```

mod action;
mod config;
mod error;
mod event;
mod newton;
mod refinement;
mod roots;
mod search;
mod solution;
mod variant;


pub use action::Action;
pub use config::{Config, ConfigError, Tolerances};
pub use error::Error;
pub use event::Event;
pub use newton::{NewtonStep, step as newton_step};
pub use refinement::{Move, Refinement};
pub use solution::{Solution, Status};
pub use variant::{Flagged, Sentinel, Variant};

use enclose_core::{Function, Interval, Observer};

use search::search;

/// Isolates the roots of `f` inside `initial`.
///
/// The observer receives an [`Event`] for each processed candidate.
/// See the [module docs](self) for the algorithm and observer actions.
///
/// # Errors
///
/// Returns an error if the config is invalid, if `initial` is empty or
/// unbounded, if a tolerance cannot be represented in the interval's scalar
/// type, or if `f` faults during evaluation.
pub fn isolate<I, F, V, Obs>(
    f: &F,
    initial: I,
    config: &Config,
    variant: &V,
    observer: Obs,
) -> Result<Solution<I>, Error>
where
    I: Interval,
    F: Function<I>,
    V: Variant,
    Obs: for<'a> Observer<Event<'a, I>, Action>,
{
    search(f, initial, config, variant, observer)
}

/// Isolates the roots of `f` inside `initial` without observer support.
///
/// This is a convenience wrapper around [`isolate`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`isolate`].
pub fn isolate_unobserved<I, F, V>(
    f: &F,
    initial: I,
    config: &Config,
    variant: &V,
) -> Result<Solution<I>, Error>
where
    I: Interval,
    F: Function<I>,
    V: Variant,
{
    isolate(f, initial, config, variant, ())
}

/// Returns enclosures of every root of `f` inside `initial`.
///
/// Runs the [`Sentinel`] variant with no iteration limit, so a function with
/// infinitely many roots below `max_width` may not terminate.
///
/// # Errors
///
/// Returns an error if `max_width` is not finite and positive, if `alpha` is
/// outside `(0, 1)`, if `initial` is empty or unbounded, or if `f` faults.
pub fn isolate_roots<I, F>(f: &F, initial: I, max_width: f64, alpha: f64) -> Result<Vec<I>, Error>
where
    I: Interval,
    F: Function<I>,
{
    let config = Config::new(max_width, alpha, usize::MAX)?;
    let solution = isolate_unobserved(f, initial, &config, &Sentinel)?;
    Ok(solution.roots)
}
