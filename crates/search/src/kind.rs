use std::{fmt, str::FromStr, time::Duration};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sift_core::{SearchAlgorithm, Trace};

use crate::{Binary, Exponential, Fibonacci, Interpolation, Jump, Linear};

/// Selects one of the supported search algorithms.
///
/// `AlgorithmKind` is itself a [`SearchAlgorithm`] that dispatches to the
/// matching unit type, so callers can stay polymorphic over a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum AlgorithmKind {
    Linear,
    Binary,
    Jump,
    Interpolation,
    Exponential,
    Fibonacci,
}

/// The input did not name a known algorithm.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown search algorithm: {0:?}")]
pub struct ParseKindError(pub String);

impl AlgorithmKind {
    /// Every algorithm, in presentation order.
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Linear,
        AlgorithmKind::Binary,
        AlgorithmKind::Jump,
        AlgorithmKind::Interpolation,
        AlgorithmKind::Exponential,
        AlgorithmKind::Fibonacci,
    ];

    /// Human-readable name, e.g. `"Binary Search"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Linear => "Linear Search",
            AlgorithmKind::Binary => "Binary Search",
            AlgorithmKind::Jump => "Jump Search",
            AlgorithmKind::Interpolation => "Interpolation Search",
            AlgorithmKind::Exponential => "Exponential Search",
            AlgorithmKind::Fibonacci => "Fibonacci Search",
        }
    }

    /// Short lower-case identifier, e.g. `"binary"`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            AlgorithmKind::Linear => "linear",
            AlgorithmKind::Binary => "binary",
            AlgorithmKind::Jump => "jump",
            AlgorithmKind::Interpolation => "interpolation",
            AlgorithmKind::Exponential => "exponential",
            AlgorithmKind::Fibonacci => "fibonacci",
        }
    }

    /// Whether the algorithm needs its input sorted in non-decreasing order.
    #[must_use]
    pub fn requires_sorted(self) -> bool {
        !matches!(self, AlgorithmKind::Linear)
    }

    /// Average-case time complexity in big-O notation.
    #[must_use]
    pub fn time_complexity(self) -> &'static str {
        match self {
            AlgorithmKind::Linear => "O(n)",
            AlgorithmKind::Binary | AlgorithmKind::Exponential | AlgorithmKind::Fibonacci => {
                "O(log n)"
            }
            AlgorithmKind::Jump => "O(√n)",
            AlgorithmKind::Interpolation => "O(log log n)",
        }
    }

    /// Auxiliary space complexity in big-O notation.
    #[must_use]
    pub fn space_complexity(self) -> &'static str {
        "O(1)"
    }

    /// How long each step stays on screen during playback.
    #[must_use]
    pub fn cadence(self) -> Duration {
        match self {
            AlgorithmKind::Linear => Duration::from_millis(500),
            AlgorithmKind::Binary => Duration::from_millis(1000),
            AlgorithmKind::Jump
            | AlgorithmKind::Interpolation
            | AlgorithmKind::Exponential
            | AlgorithmKind::Fibonacci => Duration::from_millis(800),
        }
    }

    /// The starting values shown for this algorithm before any shuffle.
    ///
    /// Sorted for every algorithm that requires it.
    #[must_use]
    pub fn sample_values(self) -> &'static [i64] {
        match self {
            AlgorithmKind::Linear => &[12, 45, 23, 67, 34, 89, 15, 56],
            AlgorithmKind::Binary => &[12, 23, 34, 45, 56, 67, 78, 89],
            AlgorithmKind::Jump => &[10, 20, 30, 40, 50, 60, 70, 80, 90],
            AlgorithmKind::Interpolation
            | AlgorithmKind::Exponential
            | AlgorithmKind::Fibonacci => &[1, 3, 5, 7, 9, 11, 13, 15],
        }
    }

    /// Number of values in a freshly generated random input.
    #[must_use]
    pub fn sample_len(self) -> usize {
        self.sample_values().len()
    }

    /// Generates the trace of this algorithm searching `values` for `target`.
    #[must_use]
    pub fn generate_trace(self, values: &[i64], target: i64) -> Trace {
        let trace = match self {
            AlgorithmKind::Linear => Linear.trace(values, target),
            AlgorithmKind::Binary => Binary.trace(values, target),
            AlgorithmKind::Jump => Jump.trace(values, target),
            AlgorithmKind::Interpolation => Interpolation.trace(values, target),
            AlgorithmKind::Exponential => Exponential.trace(values, target),
            AlgorithmKind::Fibonacci => Fibonacci.trace(values, target),
        };

        tracing::debug!(
            algorithm = self.slug(),
            target,
            len = values.len(),
            steps = trace.len(),
            outcome = %trace.outcome(),
            "generated trace"
        );

        trace
    }
}

impl SearchAlgorithm for AlgorithmKind {
    fn trace(&self, values: &[i64], target: i64) -> Trace {
        self.generate_trace(values, target)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ParseKindError;

    /// Accepts a slug (`"jump"`) or a full name (`"Jump Search"`), ignoring
    /// case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                needle.eq_ignore_ascii_case(kind.slug()) || needle.eq_ignore_ascii_case(kind.name())
            })
            .ok_or_else(|| ParseKindError(s.to_owned()))
    }
}
