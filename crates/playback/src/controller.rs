use std::{collections::BTreeSet, time::Duration};

use sift_core::{Markers, Outcome, Phase, Step, Trace};

use crate::{Clock, Config, Error, SessionId, Status, StepOutcome, SystemClock};


/// Reveals a [`Trace`] one step per tick.
///
/// The controller owns at most one trace at a time and knows nothing about
/// the algorithm that produced it beyond the shared [`Step`] shape. A host
/// (typically a UI timer firing every [`Config::cadence`]) calls
/// [`tick`](Self::tick) and applies the returned [`StepOutcome`].
///
/// # States
///
/// ```text
/// Idle ──start──▶ Running ──tick (matched)──▶ Found
///                    │
///                    └──tick (exhausted)──▶ NotFound
/// ```
///
/// `reset` returns to `Idle` from anywhere. `start` is rejected while
/// `Running`; from a terminal state it begins a new session.
#[derive(Debug)]
pub struct Controller<C = SystemClock> {
    config: Config,
    clock: C,
    issued: u64,
    session: Option<SessionId>,
    trace: Option<Trace>,
    status: Status,
    cursor: usize,
    comparisons: usize,
    jumps: usize,
    markers: Markers,
    visited: BTreeSet<usize>,
    started_at: Duration,
    elapsed: Duration,
}

impl Controller<SystemClock> {
    /// Creates an idle controller timed by the wall clock.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl Default for Controller<SystemClock> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<C: Clock> Controller<C> {
    /// Creates an idle controller timed by `clock`.
    #[must_use]
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self {
            config,
            clock,
            issued: 0,
            session: None,
            trace: None,
            status: Status::Idle,
            cursor: 0,
            comparisons: 0,
            jumps: 0,
            markers: Markers::new(),
            visited: BTreeSet::new(),
            started_at: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    /// Loads `trace` and begins a new session.
    ///
    /// Counters and markers start from zero. Starting from a terminal state
    /// discards the finished session first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRunning`] if a session is still running; the
    /// running session is left untouched.
    pub fn start(&mut self, trace: Trace) -> Result<SessionId, Error> {
        if let (Status::Running, Some(session)) = (self.status, self.session) {
            tracing::warn!(%session, "start rejected: playback already running");
            return Err(Error::AlreadyRunning(session));
        }

        self.clear();
        self.issued += 1;
        let session = SessionId(self.issued);

        tracing::info!(
            %session,
            target = trace.target(),
            steps = trace.len(),
            "playback started"
        );

        self.session = Some(session);
        self.trace = Some(trace);
        self.status = Status::Running;
        self.started_at = self.clock.now();
        Ok(session)
    }

    /// Parses `input` as the target, then starts the trace built from it.
    ///
    /// `generate` is only called once the input parsed, so a bad target never
    /// costs a trace. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRunning`] if a session is still running, or
    /// [`Error::InvalidInput`] if `input` is not an integer.
    pub fn start_search<F>(&mut self, input: &str, generate: F) -> Result<SessionId, Error>
    where
        F: FnOnce(i64) -> Trace,
    {
        if let (Status::Running, Some(session)) = (self.status, self.session) {
            tracing::warn!(%session, "start rejected: playback already running");
            return Err(Error::AlreadyRunning(session));
        }

        let target = input.trim().parse::<i64>().map_err(|source| {
            tracing::warn!(input, "start rejected: target is not an integer");
            Error::InvalidInput {
                input: input.to_owned(),
                source,
            }
        })?;

        self.start(generate(target))
    }

    /// Advances the current session by one step.
    ///
    /// While running, a tick reveals the next step, or reports exhaustion
    /// once every step has been revealed. In any other state the tick changes
    /// nothing and the returned outcome simply restates the current state.
    pub fn tick(&mut self) -> StepOutcome {
        if self.status != Status::Running {
            return self.step_outcome(None);
        }

        self.elapsed = self.clock.now().saturating_sub(self.started_at);

        let next = self
            .trace
            .as_ref()
            .and_then(|trace| trace.get(self.cursor))
            .copied();

        let Some(step) = next else {
            self.status = Status::NotFound;
            tracing::info!(
                session = ?self.session,
                comparisons = self.comparisons,
                "playback finished: not found"
            );
            return self.step_outcome(None);
        };

        self.apply(step);
        self.step_outcome(Some(step))
    }

    /// Advances only if `session` is the current session.
    ///
    /// Hosts that schedule ticks asynchronously should capture the id
    /// returned by [`start`](Self::start) and tick through this method, so
    /// that a tick armed before a `reset` cannot touch a later session.
    pub fn tick_session(&mut self, session: SessionId) -> StepOutcome {
        if self.session == Some(session) {
            self.tick()
        } else {
            tracing::debug!(%session, current = ?self.session, "ignoring stale tick");
            self.step_outcome(None)
        }
    }

    /// Returns to `Idle`, discarding the trace and all counters.
    ///
    /// Safe to call in any state and any number of times; pending ticks for
    /// the discarded session become no-ops.
    pub fn reset(&mut self) {
        if let Some(session) = self.session {
            tracing::debug!(%session, "playback reset");
        }
        self.clear();
    }

    /// The playback configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current session, if a trace is loaded.
    #[must_use]
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    /// The loaded trace, if any.
    #[must_use]
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Where the controller is in its state machine.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The search verdict, once the session is terminal.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Number of steps revealed in the current session.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Markers of the most recently revealed step.
    #[must_use]
    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Cumulative comparisons in the current session.
    #[must_use]
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Cumulative jump steps in the current session.
    #[must_use]
    pub fn jumps(&self) -> usize {
        self.jumps
    }

    /// Every index compared so far, in ascending order.
    #[must_use]
    pub fn visited(&self) -> &BTreeSet<usize> {
        &self.visited
    }

    /// Time between `start` and the latest running tick.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn apply(&mut self, step: Step) {
        self.cursor += 1;
        self.comparisons += 1;
        if step.phase == Phase::Jump {
            self.jumps += 1;
        }
        self.markers = step.markers;
        self.visited.insert(step.index);

        tracing::debug!(
            session = ?self.session,
            cursor = self.cursor,
            index = step.index,
            phase = ?step.phase,
            markers = %step.markers,
            matched = step.matched,
            "step revealed"
        );

        if step.matched {
            self.status = Status::Found(step.index);
            tracing::info!(
                session = ?self.session,
                index = step.index,
                comparisons = self.comparisons,
                "playback finished: found"
            );
        }
    }

    fn step_outcome(&self, step: Option<Step>) -> StepOutcome {
        StepOutcome {
            session: self.session,
            status: self.status,
            step,
            cursor: self.cursor,
            markers: self.markers,
            comparisons: self.comparisons,
            jumps: self.jumps,
            elapsed: self.elapsed,
            exhausted: self.status == Status::NotFound,
        }
    }

    fn clear(&mut self) {
        self.session = None;
        self.trace = None;
        self.status = Status::Idle;
        self.cursor = 0;
        self.comparisons = 0;
        self.jumps = 0;
        self.markers = Markers::new();
        self.visited.clear();
        self.started_at = Duration::ZERO;
        self.elapsed = Duration::ZERO;
    }
}
