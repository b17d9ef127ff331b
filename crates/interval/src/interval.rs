use std::fmt;

use enclose_core::{Interval, Quotient};

use crate::{IntervalError, arith::round_up};

/// A closed interval `[lower, upper]` with `f64` bounds.
///
/// The empty interval is stored as `[+inf, -inf]`, so it compares unequal to
/// every non-empty interval and fails every containment test without a
/// separate flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct F64Interval {
    pub(crate) lo: f64,
    pub(crate) hi: f64,
}

impl F64Interval {
    pub(crate) const EMPTY: Self = Self {
        lo: f64::INFINITY,
        hi: f64::NEG_INFINITY,
    };

    pub(crate) const WHOLE: Self = Self {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Creates the interval `[lower, upper]`.
    ///
    /// Infinite bounds are allowed and describe rays or the whole line.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is NaN or if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        if lower.is_nan() || upper.is_nan() {
            return Err(IntervalError::Nan);
        }
        if lower > upper {
            return Err(IntervalError::Reversed { lower, upper });
        }
        Ok(Self::raw(lower, upper))
    }

    /// Builds an interval without validation.
    pub(crate) fn raw(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Returns true if `x` lies in the interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Checks the interval for substrate faults.
    ///
    /// Arithmetic on finite operands that yields NaN or an infinite bound has
    /// overflowed or hit an invalid operation. Function implementations call
    /// this to turn such results into errors instead of silently widened
    /// enclosures.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Nan`] if a bound is NaN, or
    /// [`IntervalError::Overflow`] if a bound of a non-empty interval is
    /// infinite.
    pub fn checked(self) -> Result<Self, IntervalError> {
        if self.lo.is_nan() || self.hi.is_nan() {
            return Err(IntervalError::Nan);
        }
        if !self.is_empty() && !self.is_bounded() {
            return Err(IntervalError::Overflow {
                lower: self.lo,
                upper: self.hi,
            });
        }
        Ok(self)
    }
}

impl From<f64> for F64Interval {
    fn from(x: f64) -> Self {
        Self::raw(x, x)
    }
}

impl Interval for F64Interval {
    type Scalar = f64;

    /// Bounds are widened per operation, so there is no global mode to hold.
    type Rounding = ();

    fn enter_rounding() -> Self::Rounding {}

    fn point(x: f64) -> Self {
        Self::raw(x, x)
    }

    fn whole() -> Self {
        Self::WHOLE
    }

    fn empty() -> Self {
        Self::EMPTY
    }

    fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    fn is_bounded(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }

    fn lower(&self) -> f64 {
        self.lo
    }

    fn upper(&self) -> f64 {
        self.hi
    }

    fn median(&self) -> f64 {
        let mid = 0.5 * (self.lo + self.hi);
        let mid = if mid.is_finite() {
            mid
        } else {
            0.5 * self.lo + 0.5 * self.hi
        };
        mid.clamp(self.lo, self.hi)
    }

    #[allow(clippy::float_cmp)]
    fn width(&self) -> f64 {
        if self.is_empty() || self.lo == self.hi {
            return 0.0;
        }
        round_up(self.hi - self.lo)
    }

    fn zero_in(&self) -> bool {
        self.contains(0.0)
    }

    fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.lo <= other.hi && other.lo <= self.hi
    }

    fn intersect(&self, other: &Self) -> Self {
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        if lo > hi { Self::EMPTY } else { Self::raw(lo, hi) }
    }

    fn hull(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self::raw(self.lo.min(other.lo), self.hi.max(other.hi))
    }

    fn is_subset(&self, other: &Self) -> bool {
        self.is_empty() || (other.lo <= self.lo && self.hi <= other.hi)
    }

    fn bisect(&self) -> (Self, Self) {
        let mid = self.median();
        (Self::raw(self.lo, mid), Self::raw(mid, self.hi))
    }

    fn divide_extended(&self, rhs: &Self) -> Quotient<Self> {
        self.div_extended(rhs)
    }
}

/// Renders as `[lower, upper]`, honoring the formatter precision.
impl fmt::Display for F64Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[empty]");
        }
        match f.precision() {
            Some(p) => write!(f, "[{:.p$}, {:.p$}]", self.lo, self.hi),
            None => write!(f, "[{}, {}]", self.lo, self.hi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn iv(lo: f64, hi: f64) -> F64Interval {
        F64Interval::new(lo, hi).expect("valid interval")
    }

    #[test]
    fn new_rejects_nan_and_reversed_bounds() {
        assert_eq!(F64Interval::new(f64::NAN, 1.0), Err(IntervalError::Nan));
        assert_eq!(
            F64Interval::new(2.0, 1.0),
            Err(IntervalError::Reversed {
                lower: 2.0,
                upper: 1.0
            })
        );
        assert!(F64Interval::new(f64::NEG_INFINITY, 0.0).is_ok());
    }

    #[test]
    fn empty_is_inert() {
        let e = F64Interval::empty();
        let x = iv(-1.0, 1.0);

        assert!(e.is_empty());
        assert!(!e.zero_in());
        assert!(!e.overlaps(&x));
        assert!(!x.overlaps(&e));
        assert!(!e.is_bounded());
        assert!(e.is_subset(&x));
        assert_eq!(e.width(), 0.0);
        assert_eq!(e.hull(&x), x);
    }

    #[test]
    fn intersect_of_disjoint_is_empty() {
        assert!(iv(0.0, 1.0).intersect(&iv(2.0, 3.0)).is_empty());
        assert_eq!(iv(0.0, 2.0).intersect(&iv(1.0, 3.0)), iv(1.0, 2.0));
    }

    #[test]
    fn touching_intervals_overlap() {
        assert!(iv(0.0, 1.0).overlaps(&iv(1.0, 2.0)));
        assert!(!iv(0.0, 1.0).overlaps(&iv(1.5, 2.0)));
    }

    #[test]
    fn bisect_shares_the_median() {
        let (left, right) = iv(-1.0, 5.1).bisect();

        assert_eq!(left.lower(), -1.0);
        assert_eq!(right.upper(), 5.1);
        assert_eq!(left.upper(), right.lower());
        assert_relative_eq!(left.upper(), 2.05);
    }

    #[test]
    fn median_of_symmetric_interval_is_zero() {
        assert_eq!(iv(-1.0, 1.0).median(), 0.0);
        assert_eq!(iv(-f64::MAX, f64::MAX).median(), 0.0);
    }

    #[test]
    fn width_is_an_upper_bound() {
        assert_eq!(iv(3.0, 3.0).width(), 0.0);
        assert!(iv(0.1, 0.3).width() >= 0.2);
        assert_relative_eq!(iv(0.1, 0.3).width(), 0.2, epsilon = 1e-15);
    }

    #[test]
    fn whole_contains_everything() {
        let w = F64Interval::whole();
        assert!(w.zero_in());
        assert!(!w.is_bounded());
        assert!(iv(-1e300, 1e300).is_subset(&w));
    }

    #[test]
    fn checked_flags_faults() {
        assert_eq!(F64Interval::raw(f64::NAN, 1.0).checked(), Err(IntervalError::Nan));
        assert!(matches!(
            F64Interval::raw(0.0, f64::INFINITY).checked(),
            Err(IntervalError::Overflow { .. })
        ));
        assert!(F64Interval::empty().checked().is_ok());
        assert!(iv(0.0, 1.0).checked().is_ok());
    }

    #[test]
    fn display_honors_precision() {
        let x = iv(-1.0, 5.1);
        assert_eq!(format!("{x}"), "[-1, 5.1]");
        assert_eq!(format!("{x:.3}"), "[-1.000, 5.100]");
        assert_eq!(format!("{}", F64Interval::empty()), "[empty]");
    }
}
