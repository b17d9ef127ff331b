//! Isolates every root of a quintic with guaranteed enclosures.
//!
//! The polynomial `x(x - 1)(x - 2)(x - 3)(x - 4)` has simple roots at the
//! integers 0 through 4. Each printed interval is certified to contain one of
//! them.
//!
//! # Usage
//!
//! ```text
//! cargo run --example polynomial
//! cargo run --example polynomial -- flagged
//! cargo run --example polynomial -- sentinel
//! ```

use std::{error::Error, process::ExitCode};

use enclose_core::{Function, Interval};
use enclose_interval::{F64Interval, IntervalError};
use enclose_solvers::equation::interval_newton::{self, Config, Flagged, Sentinel, Variant};

/// f(x) = x(x - 1)(x - 2)(x - 3)(x - 4).
struct Quintic;

impl Function<F64Interval> for Quintic {
    type Error = IntervalError;

    fn value(&self, x: &F64Interval) -> Result<F64Interval, IntervalError> {
        let x = *x;
        (x * (x - 1.0) * (x - 2.0) * (x - 3.0) * (x - 4.0)).checked()
    }

    /// Horner form of 5x^4 - 40x^3 + 105x^2 - 100x + 24.
    fn derivative(&self, x: &F64Interval) -> Result<F64Interval, IntervalError> {
        let x = *x;
        ((((5.0 * x - 40.0) * x + 105.0) * x - 100.0) * x + 24.0).checked()
    }
}

fn main() -> ExitCode {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "both".into());
    let result = match mode.as_str() {
        "flagged" => run("flagged", &Flagged),
        "sentinel" => run("sentinel", &Sentinel),
        "both" => run("flagged", &Flagged).and_then(|()| run("sentinel", &Sentinel)),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: polynomial [flagged|sentinel|both]");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Runs one variant on `[-1, 5.1]` and prints the enclosures it finds.
///
/// A run that stops before the worklist is exhausted is reported as an
/// error, since its result list may be missing roots.
fn run(name: &str, variant: &impl Variant) -> Result<(), Box<dyn Error>> {
    let initial = F64Interval::new(-1.0, 5.1)?;
    let solution =
        interval_newton::isolate_unobserved(&Quintic, initial, &Config::default(), variant)?;

    println!("Variant: {name} ({} iterations)", solution.iters);
    println!("Results:");
    for root in &solution.roots {
        println!("  {root:.12}  width {:.3e}", root.width());
    }

    if !solution.is_complete() {
        return Err(format!(
            "search ended with {:?}; {} candidates left unresolved",
            solution.status,
            solution.pending.len()
        )
        .into());
    }

    Ok(())
}
