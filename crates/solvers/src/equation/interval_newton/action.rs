/// Control actions supported by the interval Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early.
    ///
    /// Roots accepted so far are returned, and the remaining worklist is
    /// reported as pending.
    StopEarly,
}
