use std::num::ParseIntError;

use thiserror::Error;

use crate::SessionId;

/// Errors that can occur when starting playback.
///
/// Both are recoverable: surface the message, then `reset` and start again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `start` was called while a session is still running.
    #[error("playback session {0} is still running")]
    AlreadyRunning(SessionId),

    /// The raw target text is not an integer.
    #[error("invalid target {input:?}: {source}")]
    InvalidInput {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
