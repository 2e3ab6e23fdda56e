//! Trace generators for classic searching algorithms.
//!
//! Each algorithm is a unit type implementing [`SearchAlgorithm`]. Given a
//! sequence of values and a target, it returns a [`Trace`] recording every
//! comparison the algorithm makes, in order, without side effects or timing.
//! [`AlgorithmKind`] selects among them at runtime.
//!
//! # Algorithms
//!
//! - [`linear`]: sequential scan; the only algorithm that accepts unsorted input
//! - [`binary`]: halves a `[left, right]` window around a floored midpoint
//! - [`jump`]: jumps by `⌊√n⌋` then scans the overshot block
//! - [`interpolation`]: estimates the position from the target's value
//! - [`exponential`]: doubles an upper bound then binary searches below it
//! - [`fibonacci`]: splits the window at Fibonacci offsets
//!
//! # Example
//!
//! ```
//! use sift_core::{Marker, Outcome};
//! use sift_search::{AlgorithmKind, generate_trace};
//!
//! let values = [12, 23, 34, 45, 56, 67, 78, 89];
//! let trace = generate_trace(&values, 45, AlgorithmKind::Binary);
//!
//! assert_eq!(trace.len(), 1);
//! assert_eq!(trace.steps()[0].markers.get(Marker::Mid), Some(3));
//! assert_eq!(trace.outcome(), Outcome::Found(3));
//! ```
//!
//! [`SearchAlgorithm`]: sift_core::SearchAlgorithm
//! [`Trace`]: sift_core::Trace

mod kind;
mod sample;

pub mod binary;
pub mod exponential;
pub mod fibonacci;
pub mod interpolation;
pub mod jump;
pub mod linear;


pub use binary::Binary;
pub use exponential::Exponential;
pub use fibonacci::Fibonacci;
pub use interpolation::{DegenerateRange, Interpolation};
pub use jump::Jump;
pub use kind::{AlgorithmKind, ParseKindError};
pub use linear::Linear;
pub use sample::random_values;

use sift_core::Trace;

/// Generates the trace of `kind` searching `values` for `target`.
///
/// Equivalent to [`AlgorithmKind::generate_trace`].
#[must_use]
pub fn generate_trace(values: &[i64], target: i64, kind: AlgorithmKind) -> Trace {
    kind.generate_trace(values, target)
}
