//! Tick-driven playback of search traces.
//!
//! A [`Controller`] holds one [`Trace`](sift_core::Trace) and reveals it one
//! step per tick, accumulating the markers, comparison counts, and timing a
//! visualizer needs to draw each frame. The controller never schedules
//! anything itself: the host owns the timer and calls
//! [`Controller::tick_session`] every [`Config::cadence`], or hands the whole
//! loop to [`play::play`].
//!
//! Time is read through the [`Clock`] trait. Production hosts use the default
//! [`SystemClock`]; tests and headless replays use [`ManualClock`] and decide
//! exactly when time moves.

pub mod clock;
mod config;
mod controller;
mod error;
mod outcome;
pub mod play;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, ConfigError};
pub use controller::Controller;
pub use error::Error;
pub use outcome::{SessionId, Status, StepOutcome};
