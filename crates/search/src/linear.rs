//! Linear search: compare every element in order.
//!
//! Works on unsorted input. Each step moves the [`Marker::Current`] marker one
//! element to the right; the trace stops at the first match, so a found trace
//! has `index + 1` steps and a miss has exactly `n`.

use sift_core::{Marker, Markers, SearchAlgorithm, Step, Trace};

/// Sequential scan from index 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Linear;

impl SearchAlgorithm for Linear {
    fn trace(&self, values: &[i64], target: i64) -> Trace {
        let mut steps = Vec::new();

        for (index, &value) in values.iter().enumerate() {
            let matched = value == target;
            steps.push(Step::scan(
                index,
                Markers::new().with(Marker::Current, index),
                matched,
            ));
            if matched {
                break;
            }
        }

        Trace::new(target, values.len(), steps)
    }
}
