use std::time::Duration;

use sift_core::Observer;

use crate::traits::{CanStopEarly, HasProgress};

/// Stops playback once more than `budget` comparisons have been made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonBudget {
    budget: usize,
}

impl ComparisonBudget {
    #[must_use]
    pub fn new(budget: usize) -> Self {
        Self { budget }
    }
}

impl<E: HasProgress, A: CanStopEarly> Observer<E, A> for ComparisonBudget {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.comparisons() > self.budget).then(A::stop_early)
    }
}

/// Stops playback once elapsed time reaches `limit` without a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    limit: Duration,
}

impl Timeout {
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }
}

impl<E: HasProgress, A: CanStopEarly> Observer<E, A> for Timeout {
    fn observe(&mut self, event: &E) -> Option<A> {
        (!event.is_finished() && event.elapsed() >= self.limit).then(A::stop_early)
    }
}
