use enclose_core::{Function, Interval};

use crate::equation::interval_newton::{
    Refinement, Tolerances,
    newton::{self, NewtonStep},
};

use super::{Variant, conclude, may_contain_root};

/// Variant that always carries a secondary interval, using the empty
/// interval to mean "no secondary candidate".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sentinel;

impl Variant for Sentinel {
    fn refine<I, F>(&self, f: &F, x: I, tol: &Tolerances<I>) -> Result<Refinement<I>, F::Error>
    where
        I: Interval,
        F: Function<I>,
    {
        let midpoint = x.median();
        let vf = f.value(&I::point(midpoint))?;
        let vd = f.derivative(&x)?;

        let (mut primary, mut secondary) = match newton::step(midpoint, &vf, &vd) {
            NewtonStep::Uninformative => (x, I::empty()),
            NewtonStep::Narrowed { primary, secondary } => (
                x.intersect(&primary),
                secondary.map_or_else(I::empty, |s| x.intersect(&s)),
            ),
        };

        if secondary.width() > primary.width() {
            std::mem::swap(&mut primary, &mut secondary);
        }

        if primary.is_empty() || !may_contain_root(f, &primary)? {
            if secondary.is_empty() || !may_contain_root(f, &secondary)? {
                return Ok(Refinement::discarded());
            }
            primary = std::mem::replace(&mut secondary, I::empty());
        }

        let secondary = (!secondary.is_empty()).then_some(secondary);
        conclude(f, x, primary, secondary, tol)
    }
}
