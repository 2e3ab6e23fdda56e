use crate::Trace;

/// A search algorithm that can explain itself step by step.
///
/// Implementations are pure: the same `values` and `target` always produce
/// the same [`Trace`], with no side effects and no notion of time.
///
/// Algorithms other than linear search assume `values` is sorted in
/// non-decreasing order and do not re-validate it. Violating that
/// precondition yields a well-formed but meaningless trace.
pub trait SearchAlgorithm {
    /// Computes every step the algorithm takes to look for `target`.
    fn trace(&self, values: &[i64], target: i64) -> Trace;
}

/// References to algorithms are algorithms.
impl<A: SearchAlgorithm + ?Sized> SearchAlgorithm for &A {
    fn trace(&self, values: &[i64], target: i64) -> Trace {
        (**self).trace(values, target)
    }
}
