//! The home facade.
//!
//! [`Home`] owns the device registry (with the single alarm), one
//! [`ModeContext`](crate::context::ModeContext), one
//! [`StateContext`](crate::context::StateContext) and one
//! [`HistoryManager`](crate::history::HistoryManager), and runs them in
//! sequence: apply the mode, apply the state, take a snapshot.
//!
//! Undo and redo here are authoritative. The history only moves its cursor;
//! the home then reapplies the recorded power states and restores the mode
//! and state by name, collecting every [`RestoreViolation`] on the way.

mod builder;
mod controller;
mod error;
mod restore;

pub use builder::HomeBuilder;
pub use controller::{Home, StateOutcome};
pub use error::{BuildError, HomeError};
pub use restore::{check_restorable, Restoration, RestoreViolation};
