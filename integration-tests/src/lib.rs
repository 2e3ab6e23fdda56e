//! Shared fixtures for the cross-crate tests under `tests/`.

use std::time::Duration;

use sift_core::Trace;
use sift_playback::{Config, Controller, ManualClock};
use sift_search::AlgorithmKind;

/// A controller on a manual clock at `kind`'s cadence, plus the clock handle.
pub fn manual_controller(kind: AlgorithmKind) -> (Controller<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = Config::new(kind.cadence()).unwrap_or_default();
    (Controller::with_clock(config, clock.clone()), clock)
}

/// The trace of `kind` over its built-in sample input.
pub fn sample_trace(kind: AlgorithmKind, target: i64) -> Trace {
    kind.generate_trace(kind.sample_values(), target)
}

/// Total playback time for `ticks` ticks at `kind`'s cadence.
pub fn playback_time(kind: AlgorithmKind, ticks: u32) -> Duration {
    kind.cadence() * ticks
}
