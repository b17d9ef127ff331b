use enclose_core::{Function, Interval, Observer};

use super::{
    Action, Config, Error, Event, Move, Solution, Status, Tolerances, Variant, roots::Roots,
};

/// Core worklist loop shared by every entry point.
///
/// Candidates are processed last-in-first-out. Each popped candidate is
/// refined by `variant`; accepted enclosures go to the result set and
/// requeued ones back onto the worklist, in the order the variant produced
/// them.
pub(super) fn search<I, F, V, Obs>(
    f: &F,
    initial: I,
    config: &Config,
    variant: &V,
    mut observer: Obs,
) -> Result<Solution<I>, Error>
where
    I: Interval,
    F: Function<I>,
    V: Variant,
    Obs: for<'a> Observer<Event<'a, I>, Action>,
{
    let _rounding = I::enter_rounding();

    if initial.is_empty() || !initial.is_bounded() {
        return Err(Error::InvalidInterval);
    }
    let tol = Tolerances::from_config(config)?;

    let mut worklist = vec![initial];
    let mut roots = Roots::new();
    let mut iters = 0;

    while let Some(candidate) = worklist.pop() {
        if iters == config.max_iters() {
            worklist.push(candidate);
            return Ok(finish(Status::MaxIters, roots, worklist, iters));
        }
        iters += 1;

        let refinement = variant
            .refine(f, candidate, &tol)
            .map_err(Error::function)?;

        for step in refinement.moves() {
            match *step {
                Move::Accept(root) => roots.insert(root),
                Move::Requeue(next) => worklist.push(next),
            }
        }

        let event = Event {
            iter: iters,
            candidate,
            refinement: &refinement,
            pending: &worklist,
            roots: roots.as_slice(),
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(finish(Status::StoppedByObserver, roots, worklist, iters));
                }
            }
        }
    }

    Ok(finish(Status::Converged, roots, worklist, iters))
}

fn finish<I: Interval>(
    status: Status,
    roots: Roots<I>,
    pending: Vec<I>,
    iters: usize,
) -> Solution<I> {
    Solution {
        status,
        roots: roots.into_vec(),
        pending,
        iters,
    }
}
