use enclose_core::Interval;

/// Accepted root enclosures, kept pairwise disjoint.
///
/// Bisection splits a candidate into two closed halves that share their
/// split point. A root sitting exactly there is enclosed by both halves, so
/// an accepted interval that overlaps earlier results is merged with them
/// into their hull. Each root then lies in exactly one result.
#[derive(Debug, Clone)]
pub(super) struct Roots<I> {
    intervals: Vec<I>,
}

impl<I: Interval> Roots<I> {
    pub(super) fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Adds an accepted enclosure, merging any results it overlaps.
    pub(super) fn insert(&mut self, root: I) {
        let mut merged = root;
        while let Some(index) = self.intervals.iter().position(|r| r.overlaps(&merged)) {
            let existing = self.intervals.remove(index);
            merged = merged.hull(&existing);
        }
        self.intervals.push(merged);
    }

    pub(super) fn as_slice(&self) -> &[I] {
        &self.intervals
    }

    pub(super) fn into_vec(self) -> Vec<I> {
        self.intervals
    }
}
