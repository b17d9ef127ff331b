use enclose_core::{Function, Interval};

use crate::equation::interval_newton::{
    Refinement, Tolerances,
    newton::{self, NewtonStep},
};

use super::{Variant, conclude, may_contain_root};

/// Variant that tracks the secondary candidate as an `Option`.
///
/// An uninformative Newton step yields the whole line as primary, which the
/// overlap test then narrows back to the candidate itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flagged;

impl Variant for Flagged {
    fn refine<I, F>(&self, f: &F, x: I, tol: &Tolerances<I>) -> Result<Refinement<I>, F::Error>
    where
        I: Interval,
        F: Function<I>,
    {
        let midpoint = x.median();
        let vf = f.value(&I::point(midpoint))?;
        let vd = f.derivative(&x)?;

        let (primary, mut secondary) = match newton::step(midpoint, &vf, &vd) {
            NewtonStep::Uninformative => (I::whole(), None),
            NewtonStep::Narrowed { primary, secondary } => (primary, secondary),
        };

        let clip = |piece: I| piece.overlaps(&x).then(|| x.intersect(&piece));

        let mut primary = match clip(primary) {
            Some(primary) => primary,
            None => match secondary.take().and_then(clip) {
                Some(promoted) => promoted,
                None => return Ok(Refinement::discarded()),
            },
        };
        secondary = secondary.and_then(clip);

        if let Some(wider) = secondary.filter(|s| s.width() > primary.width()) {
            secondary = Some(primary);
            primary = wider;
        }

        if !may_contain_root(f, &primary)? {
            match secondary.take() {
                Some(promoted) if may_contain_root(f, &promoted)? => primary = promoted,
                _ => return Ok(Refinement::discarded()),
            }
        }

        conclude(f, x, primary, secondary, tol)
    }
}
