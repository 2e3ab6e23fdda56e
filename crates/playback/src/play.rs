//! Drives a controller to completion at its configured cadence.
//!
//! Interactive hosts own their timer and call
//! [`Controller::tick_session`] themselves. For everything else (terminal
//! animations, tests, batch replays) [`play`] runs the loop:
//!
//! 1. Start the trace.
//! 2. Wait one cadence period on the [`Pacer`].
//! 3. Tick and emit the [`StepOutcome`] to the observer.
//! 4. Stop once the controller is terminal, or when the observer returns
//!    [`Action::StopEarly`].
//!
//! # Example
//!
//! ```ignore
//! use sift_playback::{Controller, play};
//!
//! let mut controller = Controller::default();
//! let summary = play::play_unobserved(&mut controller, trace, &mut play::ThreadPacer)?;
//! println!("{} after {} ticks", summary.status, summary.ticks);
//! ```

use std::{fmt, thread, time::Duration};

use sift_core::{Observer, Outcome, Trace};

use crate::{Clock, Controller, Error, ManualClock, StepOutcome};

/// Actions an observer may request during [`play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abandon playback; the controller is reset.
    StopEarly,
}

/// Waits out the period between two ticks.
pub trait Pacer {
    fn wait(&mut self, period: Duration);
}

/// Never waits.
impl Pacer for () {
    fn wait(&mut self, _period: Duration) {}
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, period: Duration) {
        thread::sleep(period);
    }
}

/// Advances the manual clock instead of sleeping.
impl Pacer for ManualClock {
    fn wait(&mut self, period: Duration) {
        self.advance(period);
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn wait(&mut self, period: Duration) {
        (**self).wait(period);
    }
}

/// How a [`play`] run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The trace played out and produced this verdict.
    Complete(Outcome),

    /// The observer requested an early stop.
    StoppedByObserver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Complete(outcome) => write!(f, "{outcome}"),
            Status::StoppedByObserver => f.write_str("stopped by observer"),
        }
    }
}

/// The result of a [`play`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub status: Status,

    /// Ticks issued, including the final exhausting tick of a miss.
    pub ticks: usize,

    pub comparisons: usize,
    pub jumps: usize,

    /// Session time as measured by the controller's clock.
    pub elapsed: Duration,
}

/// Plays `trace` on `controller`, pacing ticks with `pacer`.
///
/// The observer receives the [`StepOutcome`] of every tick and may return
/// [`Action::StopEarly`] to abandon playback, which resets the controller.
/// On completion the controller is left in its terminal state.
///
/// # Errors
///
/// Returns [`Error::AlreadyRunning`] if the controller is mid-session.
pub fn play<C, P, Obs>(
    controller: &mut Controller<C>,
    trace: Trace,
    mut pacer: P,
    mut observer: Obs,
) -> Result<Summary, Error>
where
    C: Clock,
    P: Pacer,
    Obs: Observer<StepOutcome, Action>,
{
    let session = controller.start(trace)?;
    let cadence = controller.config().cadence();
    let mut ticks = 0;

    loop {
        pacer.wait(cadence);
        let outcome = controller.tick_session(session);
        ticks += 1;

        if let Some(Action::StopEarly) = observer.observe(&outcome) {
            tracing::debug!(%session, ticks, "playback stopped by observer");
            controller.reset();
            return Ok(summary(Status::StoppedByObserver, ticks, &outcome));
        }

        if let Some(verdict) = outcome.status.outcome() {
            return Ok(summary(Status::Complete(verdict), ticks, &outcome));
        }
    }
}

/// Plays `trace` without observation.
///
/// # Errors
///
/// Returns [`Error::AlreadyRunning`] if the controller is mid-session.
pub fn play_unobserved<C, P>(
    controller: &mut Controller<C>,
    trace: Trace,
    pacer: P,
) -> Result<Summary, Error>
where
    C: Clock,
    P: Pacer,
{
    play(controller, trace, pacer, ())
}

fn summary(status: Status, ticks: usize, outcome: &StepOutcome) -> Summary {
    Summary {
        status,
        ticks,
        comparisons: outcome.comparisons,
        jumps: outcome.jumps,
        elapsed: outcome.elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use sift_search::AlgorithmKind;

    use crate::{Config, Status as Playback};

    fn manual(cadence_ms: u64) -> (Controller<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = Config::new(Duration::from_millis(cadence_ms)).expect("nonzero cadence");
        (Controller::with_clock(config, clock.clone()), clock)
    }

    fn sample_trace(kind: AlgorithmKind, target: i64) -> Trace {
        kind.generate_trace(kind.sample_values(), target)
    }

    #[test]
    fn plays_found_trace_to_completion() {
        let (mut controller, clock) = manual(500);

        let summary = play_unobserved(
            &mut controller,
            sample_trace(AlgorithmKind::Linear, 67),
            clock,
        )
        .expect("idle controller should play");

        assert_eq!(summary.status, Status::Complete(Outcome::Found(3)));
        assert_eq!(summary.ticks, 4);
        assert_eq!(summary.comparisons, 4);
        assert_relative_eq!(summary.elapsed.as_secs_f64(), 2.0);
        assert_eq!(controller.status(), Playback::Found(3));
    }

    #[test]
    fn miss_takes_one_extra_tick() {
        let (mut controller, clock) = manual(1000);

        let summary = play_unobserved(
            &mut controller,
            sample_trace(AlgorithmKind::Binary, 50),
            clock,
        )
        .expect("idle controller should play");

        assert_eq!(summary.status, Status::Complete(Outcome::NotFound));
        assert_eq!(summary.ticks, 4);
        assert_eq!(summary.comparisons, 3);
        assert_relative_eq!(summary.elapsed.as_secs_f64(), 4.0);
    }

    #[test]
    fn observer_sees_every_tick() {
        let (mut controller, clock) = manual(800);
        let mut seen = Vec::new();

        let summary = play(
            &mut controller,
            sample_trace(AlgorithmKind::Jump, 70),
            clock,
            |outcome: &StepOutcome| {
                seen.push(outcome.step.map(|step| step.index));
                None
            },
        )
        .expect("idle controller should play");

        assert_eq!(summary.jumps, 2);
        assert_eq!(
            seen,
            [Some(0), Some(3), Some(3), Some(4), Some(5), Some(6)]
        );
    }

    #[test]
    fn observer_can_stop_early() {
        let (mut controller, clock) = manual(500);

        let summary = play(
            &mut controller,
            sample_trace(AlgorithmKind::Linear, 56),
            clock,
            |outcome: &StepOutcome| (outcome.comparisons >= 2).then_some(Action::StopEarly),
        )
        .expect("idle controller should play");

        assert_eq!(summary.status, Status::StoppedByObserver);
        assert_eq!(summary.ticks, 2);
        assert_eq!(summary.comparisons, 2);
        assert_eq!(controller.status(), Playback::Idle);
    }

    #[test]
    fn refuses_running_controller() {
        let (mut controller, _) = manual(500);
        let session = controller
            .start(sample_trace(AlgorithmKind::Binary, 50))
            .expect("idle controller should start");

        let error = play_unobserved(&mut controller, Trace::empty(1), ())
            .expect_err("running controller should be refused");

        assert_eq!(error, Error::AlreadyRunning(session));
    }

    #[test]
    fn unit_pacer_does_not_move_time() {
        let (mut controller, _) = manual(500);

        let summary = play_unobserved(
            &mut controller,
            sample_trace(AlgorithmKind::Binary, 45),
            (),
        )
        .expect("idle controller should play");

        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.elapsed, Duration::ZERO);
    }
}
