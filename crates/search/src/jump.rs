//! Jump search over a sorted sequence.
//!
//! # Algorithm
//!
//! With `step = ⌊√n⌋`, the search probes block boundaries `0, step, 2·step, …`
//! (clamped to `n - 1`) while the boundary value is below the target. Each
//! such probe is a [`Phase::Jump`] step exposing [`Marker::Jump`]. Once a
//! boundary value is not below the target, the block from the last jump
//! point up to that boundary (inclusive) is scanned linearly; scan steps expose
//! [`Marker::Current`] and the block bounds as [`Marker::Left`] and
//! [`Marker::Right`].
//!
//! If even the last element is below the target, the trace ends after the
//! jump to `n - 1` without a scan.
//!
//! [`Phase::Jump`]: sift_core::Phase::Jump

use sift_core::{Marker, Markers, SearchAlgorithm, Step, Trace};

/// Block-jumping search on sorted input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jump;

impl Jump {
    /// The jump length for a sequence of `len` values: `⌊√len⌋`, at least 1.
    #[must_use]
    pub fn block_size(len: usize) -> usize {
        len.isqrt().max(1)
    }
}

impl SearchAlgorithm for Jump {
    fn trace(&self, values: &[i64], target: i64) -> Trace {
        let mut steps = Vec::new();
        let Some(last) = values.len().checked_sub(1) else {
            return Trace::empty(target);
        };
        let step = Self::block_size(values.len());

        let mut prev = 0;
        let mut curr = 0;
        while values[curr] < target {
            steps.push(Step::jump(curr, Markers::new().with(Marker::Jump, curr)));
            if curr == last {
                return Trace::new(target, values.len(), steps);
            }
            prev = curr;
            curr = (curr + step).min(last);
        }

        for index in prev..=curr {
            let matched = values[index] == target;
            let markers = Markers::new()
                .with(Marker::Left, prev)
                .with(Marker::Right, curr)
                .with(Marker::Current, index);
            steps.push(Step::scan(index, markers, matched));
            if matched {
                break;
            }
        }

        Trace::new(target, values.len(), steps)
    }
}
