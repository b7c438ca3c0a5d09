//! Bounded undo/redo history of device power configurations.
//!
//! A [`HistoryManager`] owns an ordered list of [`Snapshot`]s and a cursor
//! into it. Recording a snapshot drops any redo branch past the cursor and
//! evicts the oldest entry once the capacity is reached. Navigation only
//! moves the cursor and hands the snapshot back; putting the recorded power
//! states back onto live devices is the caller's job.

mod error;
mod manager;
mod snapshot;

pub use error::HistoryError;
pub use manager::{HistoryManager, MAX_HISTORY};
pub use snapshot::Snapshot;
