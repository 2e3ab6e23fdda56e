//! Reusable observers for Sift playback.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any driver whose events report progress and markers, including
//! [`sift_playback::play`].
//!
//! # Modules
//!
//! - [`traits`]: capability traits ([`HasProgress`], [`HasMarkers`],
//!   [`CanStopEarly`])
//!
//! [`Observer`]: sift_core::Observer
//! [`HasProgress`]: traits::HasProgress
//! [`HasMarkers`]: traits::HasMarkers
//! [`CanStopEarly`]: traits::CanStopEarly

mod log;
mod recorder;
mod stop;
pub mod traits;


pub use log::Log;
pub use recorder::Recorder;
pub use stop::{ComparisonBudget, Timeout};
