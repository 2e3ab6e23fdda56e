#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::Markers;

/// The kind of decision a [`Step`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// Equality check of one element during a linear scan.
    Scan,

    /// Equality check at a computed position (midpoint, estimate, split).
    Probe,

    /// Jump search block boundary test (`value < target`).
    Jump,

    /// Exponential search bound test (`value <= target`).
    Expand,
}

impl Phase {
    /// Returns true if this phase tests equality with the target.
    ///
    /// Only equality-testing steps can carry `matched = true`.
    #[must_use]
    pub fn tests_equality(self) -> bool {
        matches!(self, Phase::Scan | Phase::Probe)
    }
}

/// One observable decision point of a search algorithm.
///
/// Every step compares exactly one element, at [`index`](Step::index),
/// against the target. Steps are plain values; a [`Trace`](crate::Trace)
/// owns them in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Step {
    /// What kind of comparison this step made.
    pub phase: Phase,

    /// Index markers visible at this step.
    pub markers: Markers,

    /// Index of the element compared against the target.
    pub index: usize,

    /// Whether the compared element equals the target.
    pub matched: bool,
}

impl Step {
    /// Creates an equality-testing scan step.
    #[must_use]
    pub fn scan(index: usize, markers: Markers, matched: bool) -> Self {
        Self {
            phase: Phase::Scan,
            markers,
            index,
            matched,
        }
    }

    /// Creates an equality-testing probe step.
    #[must_use]
    pub fn probe(index: usize, markers: Markers, matched: bool) -> Self {
        Self {
            phase: Phase::Probe,
            markers,
            index,
            matched,
        }
    }

    /// Creates a jump step; bound tests never match.
    #[must_use]
    pub fn jump(index: usize, markers: Markers) -> Self {
        Self {
            phase: Phase::Jump,
            markers,
            index,
            matched: false,
        }
    }

    /// Creates an exponential bound step; bound tests never match.
    #[must_use]
    pub fn expand(index: usize, markers: Markers) -> Self {
        Self {
            phase: Phase::Expand,
            markers,
            index,
            matched: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Marker;

    #[test]
    fn bound_steps_never_match() {
        let markers = Markers::new().with(Marker::Jump, 3);
        assert!(!Step::jump(3, markers).matched);
        assert!(!Step::expand(3, markers).matched);
        assert!(!Phase::Jump.tests_equality());
        assert!(!Phase::Expand.tests_equality());
    }

    #[test]
    fn equality_steps_keep_match_flag() {
        let markers = Markers::new().with(Marker::Current, 1);
        let step = Step::scan(1, markers, true);

        assert_eq!(step.phase, Phase::Scan);
        assert!(step.matched);
        assert_eq!(step.markers.get(Marker::Current), Some(1));
        assert!(Step::probe(1, markers, false).phase.tests_equality());
    }
}
