use std::convert::Infallible;

use crate::Interval;

/// A real function and its first derivative, both extended to intervals.
///
/// Each method must return an enclosure of the image of its argument. The
/// engine evaluates `value` at degenerate intervals (a midpoint) and over
/// whole candidates, and `derivative` over whole candidates.
///
/// Errors are faults of the numeric substrate (overflow, invalid operations)
/// and are passed through to the caller unchanged.
pub trait Function<I: Interval> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns an enclosure of `f(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the evaluation faults.
    fn value(&self, x: &I) -> Result<I, Self::Error>;

    /// Returns an enclosure of `f'(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the evaluation faults.
    fn derivative(&self, x: &I) -> Result<I, Self::Error>;
}

/// Wraps a pair of infallible closures to implement [`Function`].
#[derive(Debug, Clone, Copy)]
pub struct FnPair<F, D> {
    pub f: F,
    pub df: D,
}

impl<F, D> FnPair<F, D> {
    /// Pairs a function with its derivative.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<I, F, D> Function<I> for FnPair<F, D>
where
    I: Interval,
    F: Fn(&I) -> I,
    D: Fn(&I) -> I,
{
    type Error = Infallible;

    fn value(&self, x: &I) -> Result<I, Self::Error> {
        Ok((self.f)(x))
    }

    fn derivative(&self, x: &I) -> Result<I, Self::Error> {
        Ok((self.df)(x))
    }
}
