use std::fmt::{Debug, Display};
use std::ops::{Mul, Sub};

use num_traits::FromPrimitive;

/// The capability set an interval type must expose to be driven by the
/// root-isolation engine.
///
/// Implementations decide how bounds are stored and how rounding is directed.
/// The engine only relies on the contract below: every operation returns an
/// interval guaranteed to enclose the exact result set.
///
/// # Empty and whole
///
/// [`Interval::empty`] is the interval containing no points. It never overlaps
/// anything, has zero width, and is returned by [`Interval::intersect`] when
/// the operands are disjoint. [`Interval::whole`] is the unbounded real line.
///
/// # Rounding scope
///
/// Backends that switch a global rounding mode do so through
/// [`Interval::enter_rounding`]. The engine acquires the guard once per call
/// and holds it until it returns, so the prior mode is restored when the guard
/// is dropped on every exit path.
pub trait Interval: Copy + Debug + Sub<Output = Self> {
    /// The bound type.
    type Scalar: Copy + PartialOrd + Mul<Output = Self::Scalar> + FromPrimitive + Debug + Display;

    /// Guard that keeps directed rounding active while alive.
    type Rounding;

    /// Enters directed-rounding mode for the lifetime of the returned guard.
    fn enter_rounding() -> Self::Rounding;

    /// Returns the degenerate interval `[x, x]`.
    fn point(x: Self::Scalar) -> Self;

    /// Returns the unbounded interval.
    fn whole() -> Self;

    /// Returns the empty interval.
    fn empty() -> Self;

    fn is_empty(&self) -> bool;

    /// Returns true if both bounds are finite.
    fn is_bounded(&self) -> bool;

    fn lower(&self) -> Self::Scalar;

    fn upper(&self) -> Self::Scalar;

    /// Returns a point inside the interval, its midpoint where representable.
    ///
    /// Only called on non-empty bounded intervals.
    fn median(&self) -> Self::Scalar;

    /// Returns `upper - lower`, or zero for the empty interval.
    fn width(&self) -> Self::Scalar;

    /// Returns true if zero lies in the interval.
    fn zero_in(&self) -> bool;

    /// Returns true if the two intervals share at least one point.
    fn overlaps(&self, other: &Self) -> bool;

    /// Returns the common part of both intervals, or the empty interval.
    #[must_use]
    fn intersect(&self, other: &Self) -> Self;

    /// Returns the smallest interval containing both operands.
    #[must_use]
    fn hull(&self, other: &Self) -> Self;

    /// Returns true if every point of `self` lies in `other`.
    fn is_subset(&self, other: &Self) -> bool;

    /// Splits a non-empty bounded interval at its median into two closed
    /// halves that share the split point.
    fn bisect(&self) -> (Self, Self);

    /// Divides `self` by `rhs`, allowing `rhs` to contain zero.
    ///
    /// When `rhs` strictly contains zero and `self` does not, the quotient is
    /// two disjoint rays. Both are returned, the lower one first.
    fn divide_extended(&self, rhs: &Self) -> Quotient<Self>;
}

/// The result of a division that may produce two disjoint pieces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quotient<I> {
    /// The first (or only) piece.
    pub first: I,

    /// The second piece, present only when the division split.
    pub second: Option<I>,
}

impl<I> Quotient<I> {
    /// Creates a single-piece quotient.
    pub fn single(first: I) -> Self {
        Self {
            first,
            second: None,
        }
    }

    /// Creates a quotient made of two disjoint pieces.
    pub fn split(first: I, second: I) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    /// Returns true if the division produced two pieces.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.second.is_some()
    }

    /// Applies `f` to every piece.
    pub fn map<J, F>(self, mut f: F) -> Quotient<J>
    where
        F: FnMut(I) -> J,
    {
        Quotient {
            first: f(self.first),
            second: self.second.map(f),
        }
    }
}
