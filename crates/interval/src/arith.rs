use std::ops::{Add, Div, Mul, Neg, Sub};

use enclose_core::Interval;

use crate::F64Interval;

/// Moves a lower bound one ulp toward negative infinity.
pub(crate) fn round_down(x: f64) -> f64 {
    x.next_down()
}

/// Moves an upper bound one ulp toward positive infinity.
pub(crate) fn round_up(x: f64) -> f64 {
    x.next_up()
}

/// Product of two bounds where zero absorbs infinity.
fn mul_bound(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 { 0.0 } else { a * b }
}

impl F64Interval {
    /// Builds `[lo, hi]` from round-to-nearest bounds, widened outward.
    pub(crate) fn outward(lo: f64, hi: f64) -> Self {
        Self::raw(round_down(lo), round_up(hi))
    }

    /// Squares the interval, which is tighter than `x * x` when `x` contains
    /// zero.
    #[must_use]
    pub fn sqr(self) -> Self {
        if self.is_empty() {
            return self;
        }
        let (a, b) = (self.lo.abs(), self.hi.abs());
        let hi = mul_bound(a.max(b), a.max(b));
        if self.zero_in() {
            Self::raw(0.0, round_up(hi))
        } else {
            let lo = mul_bound(a.min(b), a.min(b));
            Self::raw(round_down(lo).max(0.0), round_up(hi))
        }
    }

    /// Raises the interval to a non-negative integer power.
    #[must_use]
    pub fn powi(self, n: u32) -> Self {
        match n {
            0 => Self::from(1.0),
            1 => self,
            _ if n % 2 == 0 => self.powi(n / 2).sqr(),
            _ => self * self.powi(n - 1),
        }
    }
}

impl Neg for F64Interval {
    type Output = Self;

    fn neg(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::raw(-self.hi, -self.lo)
    }
}

impl Add for F64Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }
        Self::outward(self.lo + rhs.lo, self.hi + rhs.hi)
    }
}

impl Sub for F64Interval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }
        Self::outward(self.lo - rhs.hi, self.hi - rhs.lo)
    }
}

impl Mul for F64Interval {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }
        let products = [
            mul_bound(self.lo, rhs.lo),
            mul_bound(self.lo, rhs.hi),
            mul_bound(self.hi, rhs.lo),
            mul_bound(self.hi, rhs.hi),
        ];
        let lo = products.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = products.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::outward(lo, hi)
    }
}

/// Single-valued division: the hull of [`Interval::divide_extended`].
impl Div for F64Interval {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let quotient = self.divide_extended(&rhs);
        match quotient.second {
            Some(second) => quotient.first.hull(&second),
            None => quotient.first,
        }
    }
}

macro_rules! scalar_ops {
    ($($trait:ident :: $method:ident),*) => {$(
        impl $trait<f64> for F64Interval {
            type Output = Self;

            fn $method(self, rhs: f64) -> Self {
                self.$method(Self::from(rhs))
            }
        }

        impl $trait<F64Interval> for f64 {
            type Output = F64Interval;

            fn $method(self, rhs: F64Interval) -> F64Interval {
                F64Interval::from(self).$method(rhs)
            }
        }
    )*};
}

scalar_ops!(Add::add, Sub::sub, Mul::mul, Div::div);
