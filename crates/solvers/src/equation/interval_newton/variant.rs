//! The per-candidate refinement policies.
//!
//! Both variants run the same state machine on a popped candidate `x`:
//!
//! 1. Evaluate `f` at the midpoint of `x` and `f'` over `x`.
//! 2. Take an interval Newton step, or keep all of `x` if the step is
//!    uninformative.
//! 3. Intersect the Newton pieces with `x`, dropping pieces that miss it.
//! 4. Make the wider surviving piece primary.
//! 5. Discard a primary whose image no longer contains zero, promoting the
//!    secondary once.
//! 6. Accept the primary if narrow enough, bisect `x` if the step stalled,
//!    or requeue the primary.
//! 7. Accept or requeue the secondary if its image contains zero.
//!
//! They differ only in how "no secondary candidate" is represented.

mod flagged;
mod sentinel;

pub use flagged::Flagged;
pub use sentinel::Sentinel;

use enclose_core::{Function, Interval};

use super::{Refinement, Tolerances};

/// A refinement policy for one popped candidate.
pub trait Variant {
    /// Refines candidate `x`, returning what to accept, requeue, or discard.
    ///
    /// # Errors
    ///
    /// Returns the function's error if any evaluation faults.
    fn refine<I, F>(&self, f: &F, x: I, tol: &Tolerances<I>) -> Result<Refinement<I>, F::Error>
    where
        I: Interval,
        F: Function<I>;
}

/// Returns true if the image of `x` under `f` may contain a root.
fn may_contain_root<I, F>(f: &F, x: &I) -> Result<bool, F::Error>
where
    I: Interval,
    F: Function<I>,
{
    Ok(f.value(x)?.zero_in())
}

/// Decides the primary candidate, then settles the secondary.
///
/// Shared tail of both variants once the primary is known to be consistent.
/// A stalled primary bisects `x`: the left half is requeued if it may hold a
/// root and the right half replaces the secondary.
fn conclude<I, F>(
    f: &F,
    x: I,
    primary: I,
    mut secondary: Option<I>,
    tol: &Tolerances<I>,
) -> Result<Refinement<I>, F::Error>
where
    I: Interval,
    F: Function<I>,
{
    let mut refinement = Refinement::discarded();

    if tol.is_converged(&primary) {
        refinement.settle(primary, tol);
    } else if tol.is_stalled(&primary, &x) {
        let (left, right) = x.bisect();
        if may_contain_root(f, &left)? {
            refinement.requeue(left);
        }
        secondary = Some(right);
        refinement.mark_bisected();
    } else {
        refinement.requeue(primary);
    }

    if let Some(candidate) = secondary {
        if may_contain_root(f, &candidate)? {
            refinement.settle(candidate, tol);
        }
    }

    Ok(refinement)
}
