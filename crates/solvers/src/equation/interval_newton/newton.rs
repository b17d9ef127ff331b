use enclose_core::Interval;

/// The outcome of one interval Newton step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NewtonStep<I> {
    /// Both `f(midpoint)` and `f'(x)` contain zero, so the step carries no
    /// information; the caller should fall back to bisection.
    Uninformative,

    /// The Newton image `midpoint - f(midpoint) / f'(x)`, in one or two
    /// pieces. Neither piece has been intersected with `x` yet.
    Narrowed {
        /// The first piece.
        primary: I,

        /// The second piece, present only when `f'(x)` strictly contains zero.
        secondary: Option<I>,
    },
}

/// Computes the interval Newton operator for a candidate.
///
/// `midpoint` is the point `f` was evaluated at, `vf` encloses `f(midpoint)`
/// and `vd` encloses `f'` over the whole candidate. Every root of `f` in the
/// candidate lies in the returned pieces.
pub fn step<I: Interval>(midpoint: I::Scalar, vf: &I, vd: &I) -> NewtonStep<I> {
    if vf.zero_in() && vd.zero_in() {
        return NewtonStep::Uninformative;
    }

    let center = I::point(midpoint);
    let quotient = vf.divide_extended(vd).map(|piece| center - piece);

    NewtonStep::Narrowed {
        primary: quotient.first,
        secondary: quotient.second,
    }
}
