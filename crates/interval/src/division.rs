use enclose_core::{Interval, Quotient};

use crate::{
    F64Interval,
    arith::{round_down, round_up},
};

impl F64Interval {
    /// Two-piece division used by [`Interval::divide_extended`].
    ///
    /// When the divisor contains zero the exact quotient set is a union of at
    /// most two rays. A numerator that is itself `[0, 0]` stays `[0, 0]`, a
    /// numerator straddling zero gives the whole line, and a divisor of
    /// exactly `[0, 0]` gives the empty interval.
    pub(crate) fn div_extended(&self, rhs: &Self) -> Quotient<Self> {
        if self.is_empty() || rhs.is_empty() {
            return Quotient::single(Self::EMPTY);
        }
        if !rhs.zero_in() {
            return Quotient::single(self.div_nonzero(rhs));
        }

        let (yl, yu) = (rhs.lo, rhs.hi);
        if yl == 0.0 && yu == 0.0 {
            return Quotient::single(Self::EMPTY);
        }
        if self.lo == 0.0 && self.hi == 0.0 {
            return Quotient::single(*self);
        }

        // Pick the numerator bound closest to zero; a numerator that
        // straddles zero gives no information.
        let a = if self.hi < 0.0 {
            self.hi
        } else if self.lo < 0.0 {
            return Quotient::single(Self::WHOLE);
        } else {
            self.lo
        };

        // Dividing by the negative part of rhs and by the positive part of rhs
        // gives two rays; which one lies below depends on the sign of `a`.
        let from_negative = a / yl;
        let from_positive = a / yu;
        let below_and_above = |below: f64, above: f64| {
            (
                Self::raw(f64::NEG_INFINITY, round_up(below)),
                Self::raw(round_down(above), f64::INFINITY),
            )
        };

        let (negative_ray, positive_ray) = if a < 0.0 {
            below_and_above(from_positive, from_negative)
        } else {
            below_and_above(from_negative, from_positive)
        };

        match (yl < 0.0, yu > 0.0) {
            (true, true) => Quotient::split(negative_ray, positive_ray),
            (true, false) => Quotient::single(if a < 0.0 { positive_ray } else { negative_ray }),
            (false, _) => Quotient::single(if a < 0.0 { negative_ray } else { positive_ray }),
        }
    }

    /// Ordinary division by an interval that excludes zero.
    fn div_nonzero(&self, rhs: &Self) -> Self {
        let (xl, xu, yl, yu) = (self.lo, self.hi, rhs.lo, rhs.hi);
        if yl > 0.0 {
            let lo = if xl >= 0.0 { xl / yu } else { xl / yl };
            let hi = if xu >= 0.0 { xu / yl } else { xu / yu };
            Self::outward(lo, hi)
        } else {
            let lo = if xu >= 0.0 { xu / yu } else { xu / yl };
            let hi = if xl >= 0.0 { xl / yl } else { xl / yu };
            Self::outward(lo, hi)
        }
    }
}
