//! Interpolation search over a sorted sequence.
//!
//! # Algorithm
//!
//! Like binary search, the live window is `[low, high]`. Instead of the
//! midpoint, each step probes the position the target would occupy if values
//! grew linearly across the window:
//!
//! ```text
//! pos = low + (target - values[low]) * (high - low) / (values[high] - values[low])
//! ```
//!
//! The search stops once the target falls outside `[values[low], values[high]]`,
//! which may happen before the first probe.
//!
//! # Degenerate windows
//!
//! When `values[low] == values[high]` the estimate divides by zero (see
//! [`DegenerateRange`]). The window then holds a single distinct value, so the
//! trace falls back to one linear probe of `low` and ends, matched or not.
//!
//! Steps expose [`Marker::Left`] (`low`), [`Marker::Right`] (`high`) and
//! [`Marker::Estimate`] (`pos`).

use std::cmp::Ordering;

use thiserror::Error;

use sift_core::{Marker, Markers, SearchAlgorithm, Step, Trace};

/// The window endpoints hold equal values, so no position can be estimated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("degenerate range [{low}, {high}]: endpoint values are equal")]
pub struct DegenerateRange {
    /// Lower window index.
    pub low: usize,

    /// Upper window index.
    pub high: usize,
}

/// Value-guided search on sorted, ideally uniformly distributed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interpolation;

/// Estimates where `target` sits within `values[low..=high]`.
///
/// The caller must ensure `low <= high < values.len()`. The result is clamped
/// to `[low, high]`, so a target outside `[values[low], values[high]]` maps to
/// the nearer endpoint. Arithmetic is done in 128 bits so the product cannot
/// overflow for any `i64` inputs.
///
/// # Errors
///
/// Returns [`DegenerateRange`] if `values[low] == values[high]`.
pub fn estimate(
    values: &[i64],
    low: usize,
    high: usize,
    target: i64,
) -> Result<usize, DegenerateRange> {
    let span = i128::from(values[high]) - i128::from(values[low]);
    if span == 0 {
        return Err(DegenerateRange { low, high });
    }

    let width = (high - low) as i128;
    let offset = ((i128::from(target) - i128::from(values[low])) * width / span).clamp(0, width);
    // Clamped to [0, high - low], so the conversion cannot fail.
    let offset = usize::try_from(offset).unwrap_or_default();
    Ok(low + offset)
}

impl SearchAlgorithm for Interpolation {
    fn trace(&self, values: &[i64], target: i64) -> Trace {
        let mut steps = Vec::new();
        let Some(mut high) = values.len().checked_sub(1) else {
            return Trace::empty(target);
        };
        let mut low = 0;

        while low <= high {
            let window = Markers::new()
                .with(Marker::Left, low)
                .with(Marker::Right, high);

            let pos = match estimate(values, low, high, target) {
                Ok(pos) => pos,
                Err(DegenerateRange { low, .. }) => {
                    let matched = values[low] == target;
                    steps.push(Step::probe(low, window.with(Marker::Estimate, low), matched));
                    break;
                }
            };

            if target < values[low] || target > values[high] {
                break;
            }

            let markers = window.with(Marker::Estimate, pos);
            match values[pos].cmp(&target) {
                Ordering::Equal => {
                    steps.push(Step::probe(pos, markers, true));
                    break;
                }
                Ordering::Less => {
                    steps.push(Step::probe(pos, markers, false));
                    low = pos + 1;
                }
                Ordering::Greater => {
                    steps.push(Step::probe(pos, markers, false));
                    match pos.checked_sub(1) {
                        Some(next) => high = next,
                        None => break,
                    }
                }
            }
        }

        Trace::new(target, values.len(), steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sift_core::Outcome;

    const UNIFORM: [i64; 8] = [1, 3, 5, 7, 9, 11, 13, 15];

    #[test]
    fn uniform_values_hit_on_first_estimate() {
        let trace = Interpolation.trace(&UNIFORM, 7);

        assert_eq!(trace.len(), 1);
        let step = &trace.steps()[0];
        assert_eq!(step.markers.get(Marker::Left), Some(0));
        assert_eq!(step.markers.get(Marker::Right), Some(7));
        assert_eq!(step.markers.get(Marker::Estimate), Some(3));
        assert_eq!(trace.outcome(), Outcome::Found(3));
    }

    #[test]
    fn skewed_values_take_several_estimates() {
        let values = [1, 2, 3, 4, 5, 6, 7, 1000];
        let trace = Interpolation.trace(&values, 7);

        // Estimates creep right from low while the outlier dominates the span.
        let estimates: Vec<_> = trace.iter().map(|step| step.index).collect();
        assert_eq!(estimates, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(trace.outcome(), Outcome::Found(6));
    }

    #[test]
    fn out_of_range_target_stops_before_probing() {
        assert!(Interpolation.trace(&UNIFORM, 0).is_empty());
        assert!(Interpolation.trace(&UNIFORM, 16).is_empty());
        assert_eq!(Interpolation.trace(&UNIFORM, 16).outcome(), Outcome::NotFound);
    }

    #[test]
    fn in_range_miss() {
        let trace = Interpolation.trace(&UNIFORM, 8);

        assert!(!trace.is_empty());
        assert!(trace.iter().all(|step| !step.matched));
        assert_eq!(trace.outcome(), Outcome::NotFound);
    }

    #[test]
    fn degenerate_window_falls_back_to_linear_probe() {
        let trace = Interpolation.trace(&[4, 4, 4, 4], 4);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.outcome(), Outcome::Found(0));

        let miss = Interpolation.trace(&[4, 4, 4, 4], 5);
        assert_eq!(miss.len(), 1);
        assert_eq!(miss.outcome(), Outcome::NotFound);
    }

    #[test]
    fn estimate_reports_degenerate_range() {
        assert_eq!(
            estimate(&[2, 2, 9], 0, 1, 2),
            Err(DegenerateRange { low: 0, high: 1 })
        );
        assert_eq!(estimate(&[2, 2, 9], 0, 2, 9), Ok(2));
        assert_eq!(
            DegenerateRange { low: 0, high: 1 }.to_string(),
            "degenerate range [0, 1]: endpoint values are equal"
        );
    }

    #[test]
    fn estimate_survives_extreme_values() {
        let values = [i64::MIN, 0, i64::MAX];
        assert_eq!(estimate(&values, 0, 2, 0), Ok(1));
        assert_eq!(estimate(&values, 0, 2, i64::MAX), Ok(2));
        assert_eq!(estimate(&[0, 1, 2], 0, 2, i64::MAX), Ok(2));
        assert_eq!(estimate(&[0, 1, 2], 0, 2, i64::MIN), Ok(0));
    }

    #[test]
    fn single_element_takes_one_step() {
        assert_eq!(Interpolation.trace(&[5], 5).outcome(), Outcome::Found(0));
        assert_eq!(Interpolation.trace(&[5], 6).len(), 1);
        assert!(Interpolation.trace(&[], 6).is_empty());
    }
}
