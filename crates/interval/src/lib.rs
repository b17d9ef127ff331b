//! Outward-rounded `f64` intervals.
//!
//! [`F64Interval`] is a closed interval with `f64` bounds. Every arithmetic
//! operation computes its bounds in round-to-nearest and then moves the lower
//! bound one ulp down and the upper bound one ulp up, so the result encloses
//! the exact result set without switching the processor rounding mode.
//!
//! The type implements [`enclose_core::Interval`] and can be handed directly
//! to the root-isolation engine.
//!
//! # Example
//!
//! ```
//! use enclose_core::Interval;
//! use enclose_interval::F64Interval;
//!
//! let x = F64Interval::new(1.0, 2.0).unwrap();
//! let y = x * x - 2.0;
//!
//! assert!(y.zero_in());
//! assert_eq!(format!("{:.2}", x), "[1.00, 2.00]");
//! ```

mod arith;
mod division;
mod error;
mod interval;

pub use error::IntervalError;
pub use interval::F64Interval;
