use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Marker, Step};

/// The terminal verdict of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The target was found at this index.
    Found(usize),

    /// Every candidate was eliminated without a match.
    NotFound,
}

impl Outcome {
    /// Returns the index of the match, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Outcome::Found(index) => Some(index),
            Outcome::NotFound => None,
        }
    }

    /// Returns true if the target was found.
    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found(index) => write!(f, "found at index {index}"),
            Outcome::NotFound => f.write_str("not found"),
        }
    }
}

/// The ordered steps a search algorithm took for one target.
///
/// A trace is built once by a generator and never changes afterwards: its
/// fields are private and only read accessors are exposed. Generators uphold
/// these invariants, which [`Trace::new`] checks in debug builds and
/// [`Trace::try_new`] always checks:
///
/// - only the last step may have `matched = true`
/// - every step index is within the searched sequence
/// - every marker names an index within the searched sequence
///
/// With the `serde-derive` feature, deserialization goes through
/// [`Trace::try_new`], so a stored trace that breaks an invariant is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(try_from = "RawTrace"))]
pub struct Trace {
    target: i64,
    len: usize,
    steps: Vec<Step>,
}

/// A trace invariant that does not hold.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    #[error("step {position} matched but is not the last step")]
    MatchBeforeEnd { position: usize },

    #[error("step {position} compares index {index}, outside a sequence of {len}")]
    IndexOutOfBounds {
        position: usize,
        index: usize,
        len: usize,
    },

    #[error("step {position} places marker {marker} at {index}, outside a sequence of {len}")]
    MarkerOutOfBounds {
        position: usize,
        marker: Marker,
        index: usize,
        len: usize,
    },
}

impl Trace {
    /// Creates a trace for `target` over a sequence of `len` values.
    #[must_use]
    pub fn new(target: i64, len: usize, steps: Vec<Step>) -> Self {
        if cfg!(debug_assertions) {
            if let Err(error) = check(len, &steps) {
                panic!("invalid trace: {error}");
            }
        }
        Self { target, len, steps }
    }

    /// Creates a trace, rejecting steps that break a trace invariant.
    ///
    /// # Errors
    ///
    /// Returns the first broken invariant, in step order.
    pub fn try_new(target: i64, len: usize, steps: Vec<Step>) -> Result<Self, TraceError> {
        check(len, &steps)?;
        Ok(Self { target, len, steps })
    }

    /// Creates an empty trace, as produced for an empty sequence.
    #[must_use]
    pub fn empty(target: i64) -> Self {
        Self::new(target, 0, Vec::new())
    }

    /// The value searched for.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Length of the searched sequence (not the number of steps).
    #[must_use]
    pub fn input_len(&self) -> usize {
        self.len
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the trace has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps, in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The step at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The final step, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// The terminal verdict implied by the final step.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.last() {
            Some(step) if step.matched => Outcome::Found(step.index),
            _ => Outcome::NotFound,
        }
    }

    /// Iterates over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

fn check(len: usize, steps: &[Step]) -> Result<(), TraceError> {
    let last = steps.len().saturating_sub(1);
    for (position, step) in steps.iter().enumerate() {
        if step.matched && position != last {
            return Err(TraceError::MatchBeforeEnd { position });
        }
        if step.index >= len {
            return Err(TraceError::IndexOutOfBounds {
                position,
                index: step.index,
                len,
            });
        }
        if let Some((marker, index)) = step.markers.iter().find(|&(_, index)| index >= len) {
            return Err(TraceError::MarkerOutOfBounds {
                position,
                marker,
                index,
                len,
            });
        }
    }
    Ok(())
}

#[cfg(feature = "serde-derive")]
#[derive(Deserialize)]
struct RawTrace {
    target: i64,
    len: usize,
    steps: Vec<Step>,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawTrace> for Trace {
    type Error = TraceError;

    fn try_from(raw: RawTrace) -> Result<Self, Self::Error> {
        Trace::try_new(raw.target, raw.len, raw.steps)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
