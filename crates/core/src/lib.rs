//! Core traits and types for the Sift search visualizer.
//!
//! This crate defines the shared vocabulary that trace generators, the playback
//! controller, and observers build on:
//!
//! - [`Step`]: one observable decision point of a search algorithm
//! - [`Markers`]: the named index markers ([`Marker`]) a step exposes
//! - [`Trace`]: the immutable, ordered steps of one search invocation
//! - [`SearchAlgorithm`]: maps a value sequence and target to a [`Trace`]
//! - [`Observer`]: receives events and optionally returns control actions

mod algorithm;
mod marker;
mod observer;
mod step;
mod trace;

pub use algorithm::SearchAlgorithm;
pub use marker::{Marker, Markers};
pub use observer::Observer;
pub use step::{Phase, Step};
pub use trace::{Outcome, Trace, TraceError};
