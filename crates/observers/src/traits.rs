//! Capability traits for reusable playback observers.
//!
//! These traits abstract over the event and action types a driver emits, so
//! observers can be written once and used with any driver whose events expose
//! the same information.
//!
//! # Event traits
//!
//! - [`HasProgress`]: events that report how far playback has come
//! - [`HasMarkers`]: events that carry the markers on display
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use sift_core::Observer;
//! use sift_observers::traits::{CanStopEarly, HasProgress};
//!
//! struct Impatient {
//!     budget: usize,
//! }
//!
//! impl<E: HasProgress, A: CanStopEarly> Observer<E, A> for Impatient {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.comparisons() > self.budget).then(A::stop_early)
//!     }
//! }
//! ```

use std::time::Duration;

use sift_core::{Markers, Step};
use sift_playback::{StepOutcome, play};

/// An event that reports playback progress.
pub trait HasProgress {
    /// Cumulative comparisons so far.
    fn comparisons(&self) -> usize;

    /// Cumulative jump steps so far.
    fn jumps(&self) -> usize;

    /// Time since playback started.
    fn elapsed(&self) -> Duration;

    /// Returns true once playback has reached a verdict.
    fn is_finished(&self) -> bool;
}

/// An event that carries the markers on display.
pub trait HasMarkers {
    fn markers(&self) -> Markers;

    /// The step revealed by this event, if any.
    fn step(&self) -> Option<Step>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops playback early.
    fn stop_early() -> Self;
}

impl HasProgress for StepOutcome {
    fn comparisons(&self) -> usize {
        self.comparisons
    }

    fn jumps(&self) -> usize {
        self.jumps
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }
}

impl HasMarkers for StepOutcome {
    fn markers(&self) -> Markers {
        self.markers
    }

    fn step(&self) -> Option<Step> {
        self.step
    }
}

impl CanStopEarly for play::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
