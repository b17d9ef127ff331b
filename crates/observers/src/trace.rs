use std::io;

use enclose_core::Observer;

use crate::traits::{HasCandidate, HasProgress};

/// Writes one `key=value` line per solver event.
///
/// Each line has the form
///
/// ```text
/// iter=3 candidate=[0.5, 2.05] pending=2 roots=1
/// ```
///
/// Tracing never steers the solver. The first write failure is kept and
/// tracing stops; [`Trace::into_inner`] reports it.
///
/// # Example
///
/// ```rust
/// use enclose_core::{FnPair, Observer};
/// use enclose_interval::F64Interval;
/// use enclose_observers::Trace;
/// use enclose_solvers::equation::interval_newton::{self, Action, Config, Event, Sentinel};
///
/// let f = FnPair::new(|x: &F64Interval| x.sqr() - 2.0, |x: &F64Interval| 2.0 * *x);
/// let initial = F64Interval::new(-3.0, 3.0).unwrap();
///
/// let mut trace = Trace::new(Vec::new()).with_precision(4);
/// let observer = |event: &Event<'_, F64Interval>| -> Option<Action> { trace.observe(event) };
/// let solution =
///     interval_newton::isolate(&f, initial, &Config::default(), &Sentinel, observer).unwrap();
///
/// let log = String::from_utf8(trace.into_inner().unwrap()).unwrap();
/// assert_eq!(log.lines().count(), solution.iters);
/// assert!(log.starts_with("iter=1 candidate=[-3.0000, 3.0000]"));
/// ```
#[derive(Debug)]
pub struct Trace<W> {
    writer: W,
    precision: Option<usize>,
    error: Option<io::Error>,
}

impl<W: io::Write> Trace<W> {
    /// Creates a tracer that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            precision: None,
            error: None,
        }
    }

    /// Prints interval bounds with `digits` decimal places.
    #[must_use]
    pub fn with_precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first write error encountered while tracing.
    pub fn into_inner(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.writer),
        }
    }

    fn write_event<E: HasCandidate + HasProgress>(&mut self, event: &E) -> io::Result<()> {
        write!(self.writer, "iter={} candidate=", event.iter())?;
        match self.precision {
            Some(p) => write!(self.writer, "{:.p$}", event.candidate())?,
            None => write!(self.writer, "{}", event.candidate())?,
        }
        writeln!(
            self.writer,
            " pending={} roots={}",
            event.pending(),
            event.roots_found()
        )
    }
}

impl<E, A, W> Observer<E, A> for Trace<W>
where
    E: HasCandidate + HasProgress,
    W: io::Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_none() {
            if let Err(err) = self.write_event(event) {
                self.error = Some(err);
            }
        }
        None
    }
}
