use sift_core::{Observer, Step};

use crate::traits::HasMarkers;

/// Records every revealed step, in order.
///
/// Ticks that reveal nothing (the exhausting tick of a miss, stale ticks) are
/// skipped. Pass `&mut recorder` to keep the recording after playback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded steps.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Indices compared, in reveal order; repeats are kept.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps.iter().map(|step| step.index)
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl<E: HasMarkers, A> Observer<E, A> for Recorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(step) = event.step() {
            self.steps.push(step);
        }
        None
    }
}

impl<E: HasMarkers, A> Observer<E, A> for &mut Recorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}
