//! Snapshot list with a cursor.

use super::{HistoryError, Snapshot};
use crate::device::DeviceHandle;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::Write;

/// Default number of snapshots retained.
pub const MAX_HISTORY: usize = 50;

/// Bounded, linear undo/redo history.
///
/// The cursor is `None` only while the history is empty; otherwise it always
/// points at a retained snapshot.
///
/// # Example
///
/// ```rust
/// use hearth::history::{HistoryError, HistoryManager};
///
/// let mut history = HistoryManager::with_capacity(3);
/// for mode in ["Normal", "Party", "Cinema", "Evening"] {
///     history.snapshot("Normal", mode, &[]);
/// }
///
/// // The oldest entry was evicted.
/// assert_eq!(history.history_size(), 3);
/// assert_eq!(history.get(0).unwrap().mode_name(), "Party");
///
/// assert_eq!(history.undo_step().unwrap().mode_name(), "Cinema");
/// assert_eq!(history.redo_step().unwrap().mode_name(), "Evening");
/// assert_eq!(history.redo_step().unwrap_err(), HistoryError::NoNext);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "HistoryParts")]
pub struct HistoryManager {
    snapshots: VecDeque<Snapshot>,
    cursor: Option<usize>,
    capacity: usize,
}

/// Unchecked serialized form of a [`HistoryManager`].
#[derive(Deserialize)]
struct HistoryParts {
    snapshots: VecDeque<Snapshot>,
    cursor: Option<usize>,
    capacity: usize,
}

impl TryFrom<HistoryParts> for HistoryManager {
    type Error = HistoryError;

    fn try_from(parts: HistoryParts) -> Result<Self, Self::Error> {
        let HistoryParts {
            snapshots,
            cursor,
            capacity,
        } = parts;
        let len = snapshots.len();

        if capacity == 0 {
            return Err(HistoryError::ZeroCapacity);
        }
        if len > capacity {
            return Err(HistoryError::OverCapacity { len, capacity });
        }
        let cursor_valid = match cursor {
            None => len == 0,
            Some(cursor) => cursor < len,
        };
        if !cursor_valid {
            return Err(HistoryError::CursorOutOfRange { cursor, len });
        }

        Ok(Self {
            snapshots,
            cursor,
            capacity,
        })
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    /// Empty history holding up to [`MAX_HISTORY`] snapshots.
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// Empty history holding up to `capacity` snapshots (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    /// Capture the power flag of every device and record it.
    pub fn snapshot(
        &mut self,
        state_name: &str,
        mode_name: &str,
        devices: &[DeviceHandle],
    ) -> &Snapshot {
        self.record(Snapshot::capture(state_name, mode_name, devices))
    }

    /// Append a snapshot after the cursor.
    ///
    /// Everything past the cursor is discarded first. At capacity the oldest
    /// snapshot is evicted and the remaining indices shift down by one.
    pub fn record(&mut self, snapshot: Snapshot) -> &Snapshot {
        if let Some(cursor) = self.cursor {
            let kept = cursor + 1;
            if kept < self.snapshots.len() {
                let discarded = self.snapshots.len() - kept;
                self.snapshots.truncate(kept);
                tracing::debug!(discarded, "Redo branch discarded");
            }
        }

        while self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
            tracing::debug!(capacity = self.capacity, "Oldest snapshot evicted");
        }

        tracing::info!(
            state = snapshot.state_name(),
            mode = snapshot.mode_name(),
            devices = snapshot.device_count(),
            "State saved"
        );
        self.snapshots.push_back(snapshot);
        let last = self.snapshots.len() - 1;
        self.cursor = Some(last);
        &self.snapshots[last]
    }

    /// Move the cursor back one step and return the snapshot there.
    pub fn undo_step(&mut self) -> Result<&Snapshot, HistoryError> {
        let cursor = match self.cursor {
            Some(cursor) if cursor > 0 => cursor - 1,
            _ => {
                tracing::warn!("No previous state available");
                return Err(HistoryError::NoPrevious);
            }
        };
        self.cursor = Some(cursor);
        let snapshot = &self.snapshots[cursor];
        tracing::info!(
            index = cursor,
            state = snapshot.state_name(),
            mode = snapshot.mode_name(),
            "Restored previous state"
        );
        Ok(snapshot)
    }

    /// Move the cursor forward one step and return the snapshot there.
    pub fn redo_step(&mut self) -> Result<&Snapshot, HistoryError> {
        let cursor = match self.cursor {
            Some(cursor) if cursor + 1 < self.snapshots.len() => cursor + 1,
            _ => {
                tracing::warn!("No next state available");
                return Err(HistoryError::NoNext);
            }
        };
        self.cursor = Some(cursor);
        let snapshot = &self.snapshots[cursor];
        tracing::info!(
            index = cursor,
            state = snapshot.state_name(),
            mode = snapshot.mode_name(),
            "Restored next state"
        );
        Ok(snapshot)
    }

    pub fn history_size(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|cursor| self.snapshots.get(cursor))
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Retained snapshots, oldest first.
    pub fn snapshots(&self) -> impl ExactSizeIterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.snapshots.len())
    }

    /// Ordered listing of every snapshot with the cursor marked by `->`.
    pub fn display_history(&self) -> String {
        let mut out = String::from("=== State History ===\n");
        for (index, snapshot) in self.snapshots.iter().enumerate() {
            let marker = if Some(index) == self.cursor { " -> " } else { "    " };
            let _ = writeln!(out, "{marker}[{index}] {snapshot}");
        }
        let _ = write!(out, "Total: {} states", self.snapshots.len());
        out
    }
}
