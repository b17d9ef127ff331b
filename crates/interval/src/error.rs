use thiserror::Error;

/// Errors raised when building or checking an [`F64Interval`].
///
/// [`F64Interval`]: crate::F64Interval
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    #[error("interval bound is NaN")]
    Nan,

    #[error("interval bounds are reversed: lower {lower} > upper {upper}")]
    Reversed { lower: f64, upper: f64 },

    #[error("interval bound overflowed: [{lower}, {upper}]")]
    Overflow { lower: f64, upper: f64 },
}
