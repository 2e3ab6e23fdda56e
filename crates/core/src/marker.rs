use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// A named index marker exposed by a search step.
///
/// Each algorithm sets only the markers that mean something to it:
/// binary search uses [`Left`](Marker::Left), [`Right`](Marker::Right) and
/// [`Mid`](Marker::Mid), jump search uses [`Jump`](Marker::Jump) and
/// [`Current`](Marker::Current), and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum Marker {
    /// Lower bound of the live search window.
    Left,

    /// Upper bound of the live search window.
    Right,

    /// Midpoint probe (binary search) or Fibonacci split point.
    Mid,

    /// Position estimated from the target value (interpolation search).
    Estimate,

    /// Element under a linear scan.
    Current,

    /// Block boundary reached by a jump.
    Jump,

    /// Exponentially growing upper bound.
    Bound,

    /// Index of the last eliminated element (Fibonacci search).
    Offset,
}

impl Marker {
    /// Every marker, in declaration order.
    pub const ALL: [Marker; 8] = [
        Marker::Left,
        Marker::Right,
        Marker::Mid,
        Marker::Estimate,
        Marker::Current,
        Marker::Jump,
        Marker::Bound,
        Marker::Offset,
    ];

    /// Returns the lower-case name used in logs and rendered output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Marker::Left => "left",
            Marker::Right => "right",
            Marker::Mid => "mid",
            Marker::Estimate => "estimate",
            Marker::Current => "current",
            Marker::Jump => "jump",
            Marker::Bound => "bound",
            Marker::Offset => "offset",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of index markers visible at one step.
///
/// Markers are either set to an array index or absent. The type is `Copy`
/// so the playback controller can hand out snapshots freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Markers {
    slots: [Option<usize>; 8],
}

impl Markers {
    /// Creates an empty marker set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the marker set with `marker` placed at `index`.
    #[must_use]
    pub fn with(mut self, marker: Marker, index: usize) -> Self {
        self.set(marker, index);
        self
    }

    /// Returns the marker set with `marker` placed at `index`, if any.
    #[must_use]
    pub fn with_opt(mut self, marker: Marker, index: Option<usize>) -> Self {
        self.slots[marker.slot()] = index;
        self
    }

    /// Places `marker` at `index`.
    pub fn set(&mut self, marker: Marker, index: usize) {
        self.slots[marker.slot()] = Some(index);
    }

    /// Removes `marker`.
    pub fn clear(&mut self, marker: Marker) {
        self.slots[marker.slot()] = None;
    }

    /// Returns the index of `marker`, if set.
    #[must_use]
    pub fn get(&self, marker: Marker) -> Option<usize> {
        self.slots[marker.slot()]
    }

    /// Returns true if no marker is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates over the set markers in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Marker, usize)> + '_ {
        Marker::ALL
            .into_iter()
            .filter_map(|marker| self.get(marker).map(|index| (marker, index)))
    }

    /// Returns every marker placed at `index`.
    pub fn at(&self, index: usize) -> impl Iterator<Item = Marker> + '_ {
        self.iter()
            .filter(move |&(_, at)| at == index)
            .map(|(marker, _)| marker)
    }
}

impl fmt::Display for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (marker, index) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{marker}={index}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_line_up_with_all() {
        for (slot, marker) in Marker::ALL.into_iter().enumerate() {
            assert_eq!(marker.slot(), slot);
        }
    }

    #[test]
    fn builder_sets_and_overwrites() {
        let markers = Markers::new()
            .with(Marker::Left, 0)
            .with(Marker::Right, 7)
            .with(Marker::Left, 4);

        assert_eq!(markers.get(Marker::Left), Some(4));
        assert_eq!(markers.get(Marker::Right), Some(7));
        assert_eq!(markers.get(Marker::Mid), None);
    }

    #[test]
    fn with_opt_none_clears() {
        let markers = Markers::new()
            .with(Marker::Offset, 2)
            .with_opt(Marker::Offset, None);
        assert!(markers.is_empty());
    }

    #[test]
    fn iter_is_in_declaration_order() {
        let markers = Markers::new()
            .with(Marker::Mid, 3)
            .with(Marker::Left, 0)
            .with(Marker::Right, 7);

        let collected: Vec<_> = markers.iter().collect();
        assert_eq!(
            collected,
            vec![(Marker::Left, 0), (Marker::Right, 7), (Marker::Mid, 3)]
        );
    }

    #[test]
    fn at_finds_overlapping_markers() {
        let markers = Markers::new()
            .with(Marker::Left, 4)
            .with(Marker::Right, 4)
            .with(Marker::Mid, 4)
            .with(Marker::Bound, 8);

        let at_four: Vec<_> = markers.at(4).collect();
        assert_eq!(at_four, vec![Marker::Left, Marker::Right, Marker::Mid]);
    }

    #[test]
    fn display_lists_set_markers() {
        let mut markers = Markers::new().with(Marker::Left, 0).with(Marker::Mid, 3);
        assert_eq!(markers.to_string(), "left=0, mid=3");

        markers.clear(Marker::Left);
        assert_eq!(markers.to_string(), "mid=3");
        assert_eq!(Markers::new().to_string(), "");
    }
}
