use std::{fmt, time::Duration};

use sift_core::{Markers, Outcome, Step};

/// Identifies one playback session of a controller.
///
/// A host that arms a timer for a session passes the id back through
/// [`Controller::tick_session`](crate::Controller::tick_session); ticks for a
/// session that has since been reset or replaced are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub(crate) u64);

impl SessionId {
    /// The raw session number; numbers increase with every `start`.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a controller is in its state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// No trace loaded.
    #[default]
    Idle,

    /// A trace is being revealed.
    Running,

    /// A step matched the target at this index.
    Found(usize),

    /// The trace ran out without a match.
    NotFound,
}

impl Status {
    /// Returns true for [`Found`](Status::Found) and
    /// [`NotFound`](Status::NotFound).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Found(_) | Status::NotFound)
    }

    /// The search verdict, once terminal.
    #[must_use]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Status::Found(index) => Some(Outcome::Found(index)),
            Status::NotFound => Some(Outcome::NotFound),
            Status::Idle | Status::Running => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => f.write_str("idle"),
            Status::Running => f.write_str("running"),
            Status::Found(index) => write!(f, "found at index {index}"),
            Status::NotFound => f.write_str("not found"),
        }
    }
}

/// Everything a presentation layer needs after one tick.
///
/// Produced whole by [`Controller::tick`](crate::Controller::tick) so the
/// view never observes a half-applied step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// The session this tick belonged to, if any.
    pub session: Option<SessionId>,

    /// Status after the tick.
    pub status: Status,

    /// The step revealed by this tick, if the tick advanced.
    pub step: Option<Step>,

    /// Number of steps revealed so far in the session.
    pub cursor: usize,

    /// Markers currently on display.
    pub markers: Markers,

    /// Cumulative comparisons.
    pub comparisons: usize,

    /// Cumulative jump steps.
    pub jumps: usize,

    /// Time since the session started.
    pub elapsed: Duration,

    /// True once the trace ran out without a match.
    pub exhausted: bool,
}

impl StepOutcome {
    /// Returns true if this tick revealed a step.
    #[must_use]
    pub fn advanced(&self) -> bool {
        self.step.is_some()
    }

    /// Returns true if the step revealed by this tick matched the target.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.step.is_some_and(|step| step.matched)
    }
}
