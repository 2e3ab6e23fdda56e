//! Fibonacci search over a sorted sequence.
//!
//! # Algorithm
//!
//! Let `fib` be the smallest Fibonacci number `>= n`, with `fib1` and `fib2`
//! the two before it. The live window starts just after `offset` (initially
//! before index 0). While `fib > 1`, probe `i = min(offset + fib2, n - 1)`:
//!
//! - `values[i] < target`: drop everything up to `i` (`offset = i`) and step
//!   the Fibonacci triple down once
//! - `values[i] > target`: drop everything after `i` and step down twice
//! - otherwise the target is found
//!
//! When the loop ends with `fib1 == 1`, one element right after `offset` is
//! still unchecked and gets a final probe.
//!
//! Splitting uses only addition and subtraction. Steps expose [`Marker::Mid`]
//! (the split point) and, once something has been eliminated,
//! [`Marker::Offset`].

use std::cmp::Ordering;

use sift_core::{Marker, Markers, SearchAlgorithm, Step, Trace};

/// Fibonacci-split search on sorted input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fibonacci;

impl SearchAlgorithm for Fibonacci {
    fn trace(&self, values: &[i64], target: i64) -> Trace {
        let mut steps = Vec::new();
        let Some(last) = values.len().checked_sub(1) else {
            return Trace::empty(target);
        };

        let (mut fib2, mut fib1) = (0_usize, 1_usize);
        let mut fib = fib2 + fib1;
        while fib < values.len() {
            fib2 = fib1;
            fib1 = fib;
            fib = fib2 + fib1;
        }

        // First index not yet eliminated on the left.
        let mut start = 0;
        let mut offset = None;

        while fib > 1 {
            // fib2 >= 1 whenever fib > 1.
            let i = (start + fib2 - 1).min(last);
            let markers = Markers::new()
                .with(Marker::Mid, i)
                .with_opt(Marker::Offset, offset);

            match values[i].cmp(&target) {
                Ordering::Less => {
                    steps.push(Step::probe(i, markers, false));
                    fib = fib1;
                    fib1 = fib2;
                    fib2 = fib - fib1;
                    offset = Some(i);
                    start = i + 1;
                }
                Ordering::Greater => {
                    steps.push(Step::probe(i, markers, false));
                    fib = fib2;
                    fib1 -= fib2;
                    fib2 = fib - fib1;
                }
                Ordering::Equal => {
                    steps.push(Step::probe(i, markers, true));
                    return Trace::new(target, values.len(), steps);
                }
            }
        }

        if fib1 == 1 && start <= last {
            let markers = Markers::new()
                .with(Marker::Mid, start)
                .with_opt(Marker::Offset, offset);
            steps.push(Step::probe(start, markers, values[start] == target));
        }

        Trace::new(target, values.len(), steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sift_core::Outcome;

    const VALUES: [i64; 8] = [1, 3, 5, 7, 9, 11, 13, 15];

    fn probes(trace: &Trace) -> Vec<usize> {
        trace.iter().map(|step| step.index).collect()
    }

    #[test]
    fn finds_target_with_fibonacci_splits() {
        // n = 8 → fib = 8, fib1 = 5, fib2 = 3; first probe at index 2.
        let trace = Fibonacci.trace(&VALUES, 7);

        assert_eq!(probes(&trace), vec![2, 4, 3]);
        assert_eq!(trace.outcome(), Outcome::Found(3));

        assert_eq!(trace.steps()[0].markers.get(Marker::Offset), None);
        assert_eq!(trace.steps()[1].markers.get(Marker::Offset), Some(2));
    }

    #[test]
    fn finds_every_present_value() {
        for (index, &value) in VALUES.iter().enumerate() {
            let trace = Fibonacci.trace(&VALUES, value);
            assert_eq!(trace.outcome(), Outcome::Found(index), "value {value}");
        }
    }

    #[test]
    fn misses_between_values() {
        for target in [0, 2, 8, 14, 16] {
            let trace = Fibonacci.trace(&VALUES, target);
            assert_eq!(trace.outcome(), Outcome::NotFound, "target {target}");
            assert!(trace.iter().all(|step| !step.matched));
        }
    }

    #[test]
    fn final_probe_checks_the_element_after_offset() {
        // n = 2 → fib = 2, fib1 = 1, fib2 = 1: probe 0, then fib drops to 1
        // and the element after the offset still needs a look.
        let trace = Fibonacci.trace(&[1, 3], 3);

        assert_eq!(probes(&trace), vec![0, 1]);
        assert_eq!(trace.steps()[1].markers.get(Marker::Offset), Some(0));
        assert_eq!(trace.outcome(), Outcome::Found(1));
    }

    #[test]
    fn empty_and_single() {
        assert!(Fibonacci.trace(&[], 1).is_empty());

        let hit = Fibonacci.trace(&[4], 4);
        assert_eq!(probes(&hit), vec![0]);
        assert_eq!(hit.outcome(), Outcome::Found(0));

        let miss = Fibonacci.trace(&[4], 5);
        assert_eq!(probes(&miss), vec![0]);
        assert_eq!(miss.outcome(), Outcome::NotFound);
    }
}
