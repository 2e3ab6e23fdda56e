use sift_core::Observer;

use crate::traits::{HasMarkers, HasProgress};

/// Emits each revealed step as an `info` event under the `sift::playback`
/// target.
///
/// Useful when the host has no screen of its own; the library's own `debug`
/// events carry the same fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct Log;

impl<E: HasMarkers + HasProgress, A> Observer<E, A> for Log {
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(step) = event.step() {
            tracing::info!(
                target: "sift::playback",
                index = step.index,
                phase = ?step.phase,
                matched = step.matched,
                markers = %event.markers(),
                comparisons = event.comparisons(),
                "step"
            );
        }
        None
    }
}
