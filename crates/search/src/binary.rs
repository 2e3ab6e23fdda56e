//! Binary search over a sorted sequence.
//!
//! # Algorithm
//!
//! The live window is `[left, right]`, starting at `[0, n - 1]`. Each step
//! probes `mid = left + (right - left) / 2`, so the midpoint always floors
//! toward `left`. A match ends the trace; otherwise the window keeps the half
//! that can still hold the target. The trace ends without a match once
//! `left > right`.
//!
//! Every step exposes [`Marker::Left`], [`Marker::Right`] and [`Marker::Mid`].
//! A trace never has more than `⌈log₂ n⌉ + 1` steps.

use std::cmp::Ordering;

use sift_core::{Marker, Markers, SearchAlgorithm, Step, Trace};

/// Halving search on sorted input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Binary;

impl SearchAlgorithm for Binary {
    fn trace(&self, values: &[i64], target: i64) -> Trace {
        let mut steps = Vec::new();
        if let Some(right) = values.len().checked_sub(1) {
            bisect(values, target, 0, right, Markers::new(), &mut steps);
        }
        Trace::new(target, values.len(), steps)
    }
}

/// Binary searches the inclusive window `[left, right]`, appending steps.
///
/// Every recorded step carries `base` plus the window markers, which lets
/// callers such as exponential search keep their own markers visible.
/// Returns true if a step matched.
pub(crate) fn bisect(
    values: &[i64],
    target: i64,
    mut left: usize,
    mut right: usize,
    base: Markers,
    steps: &mut Vec<Step>,
) -> bool {
    while left <= right {
        let mid = left + (right - left) / 2;
        let markers = base
            .with(Marker::Left, left)
            .with(Marker::Right, right)
            .with(Marker::Mid, mid);

        match values[mid].cmp(&target) {
            Ordering::Equal => {
                steps.push(Step::probe(mid, markers, true));
                return true;
            }
            Ordering::Less => {
                steps.push(Step::probe(mid, markers, false));
                left = mid + 1;
            }
            Ordering::Greater => {
                steps.push(Step::probe(mid, markers, false));
                match mid.checked_sub(1) {
                    Some(next) => right = next,
                    None => break,
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    use sift_core::Outcome;

    const VALUES: [i64; 8] = [12, 23, 34, 45, 56, 67, 78, 89];

    fn window(step: &Step) -> (Option<usize>, Option<usize>, Option<usize>) {
        (
            step.markers.get(Marker::Left),
            step.markers.get(Marker::Right),
            step.markers.get(Marker::Mid),
        )
    }

    #[test]
    fn direct_hit_on_first_probe() {
        let trace = Binary.trace(&VALUES, 45);

        assert_eq!(trace.len(), 1);
        assert_eq!(window(&trace.steps()[0]), (Some(0), Some(7), Some(3)));
        assert!(trace.steps()[0].matched);
        assert_eq!(trace.outcome(), Outcome::Found(3));
    }

    #[test]
    fn miss_narrows_until_window_is_empty() {
        // 50 > 45 → left = 4; 50 < 67 → right = 4; 50 < 56 → right = 3.
        let trace = Binary.trace(&VALUES, 50);

        let windows: Vec<_> = trace.iter().map(window).collect();
        assert_eq!(
            windows,
            vec![
                (Some(0), Some(7), Some(3)),
                (Some(4), Some(7), Some(5)),
                (Some(4), Some(4), Some(4)),
            ]
        );
        assert_eq!(trace.outcome(), Outcome::NotFound);
    }

    #[test]
    fn below_first_element_does_not_underflow() {
        let trace = Binary.trace(&VALUES, 1);

        let mids: Vec<_> = trace.iter().map(|step| step.index).collect();
        assert_eq!(mids, vec![3, 1, 0]);
        assert_eq!(trace.outcome(), Outcome::NotFound);
    }

    #[test]
    fn above_last_element() {
        let trace = Binary.trace(&VALUES, 100);

        let mids: Vec<_> = trace.iter().map(|step| step.index).collect();
        assert_eq!(mids, vec![3, 5, 6, 7]);
        assert_eq!(trace.outcome(), Outcome::NotFound);
    }

    #[test]
    fn midpoint_floors_toward_left() {
        let trace = Binary.trace(&[1, 2], 2);

        let mids: Vec<_> = trace.iter().map(|step| step.index).collect();
        assert_eq!(mids, vec![0, 1]);
        assert_eq!(trace.outcome(), Outcome::Found(1));
    }

    #[test]
    fn bisect_keeps_base_markers() {
        let mut steps = Vec::new();
        let base = Markers::new().with(Marker::Bound, 4);

        let found = bisect(&VALUES, 67, 2, 4, base, &mut steps);

        assert!(!found);
        assert!(
            steps
                .iter()
                .all(|step| step.markers.get(Marker::Bound) == Some(4))
        );
        assert_eq!(steps[0].markers.get(Marker::Left), Some(2));
    }

    #[test]
    fn empty_and_single() {
        assert!(Binary.trace(&[], 3).is_empty());

        let trace = Binary.trace(&[3], 4);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.outcome(), Outcome::NotFound);
    }
}
