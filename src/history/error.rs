//! History navigation errors.

use thiserror::Error;

/// Errors from navigating or loading a history.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("no previous state available")]
    NoPrevious,

    #[error("no next state available")]
    NoNext,

    #[error("history capacity must be at least 1")]
    ZeroCapacity,

    #[error("history holds {len} snapshots but its capacity is {capacity}")]
    OverCapacity { len: usize, capacity: usize },

    #[error("history cursor {cursor:?} does not point into {len} snapshots")]
    CursorOutOfRange { cursor: Option<usize>, len: usize },
}
