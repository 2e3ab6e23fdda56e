//! Exponential search over a sorted sequence.
//!
//! # Algorithm
//!
//! 1. Probe index 0; a match ends the trace.
//! 2. Starting from `bound = 1`, double `bound` while `values[bound] <= target`.
//!    Each test is a [`Phase::Expand`] step exposing [`Marker::Bound`].
//! 3. Binary search the window `[max(bound / 2, 1), min(bound, n - 1)]`, with
//!    [`Marker::Bound`] kept visible on every step, clamped to the last index.
//!
//! The range-finding phase makes this a good fit when the target sits near
//! the start of a long (or unbounded) sequence.
//!
//! [`Phase::Expand`]: sift_core::Phase::Expand

use sift_core::{Marker, Markers, SearchAlgorithm, Step, Trace};

use crate::binary::bisect;

/// Doubling range search followed by binary search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exponential;

impl SearchAlgorithm for Exponential {
    fn trace(&self, values: &[i64], target: i64) -> Trace {
        let mut steps = Vec::new();
        let Some(last) = values.len().checked_sub(1) else {
            return Trace::empty(target);
        };

        let first_matched = values[0] == target;
        steps.push(Step::probe(0, Markers::new().with(Marker::Bound, 0), first_matched));
        if first_matched {
            return Trace::new(target, values.len(), steps);
        }

        let mut bound = 1;
        while bound < values.len() && values[bound] <= target {
            steps.push(Step::expand(bound, Markers::new().with(Marker::Bound, bound)));
            bound *= 2;
        }

        let left = (bound / 2).max(1);
        let right = bound.min(last);
        bisect(
            values,
            target,
            left,
            right,
            Markers::new().with(Marker::Bound, right),
            &mut steps,
        );

        Trace::new(target, values.len(), steps)
    }
}
