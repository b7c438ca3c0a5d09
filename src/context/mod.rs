//! Mode and system state contexts.
//!
//! Both contexts hold one active variant picked by a selector character.
//! [`ModeContext`] also knows how to fan its mode out over device
//! collections; [`StateContext`] is descriptive and routes its previous
//! selector into history.

mod mode;
mod state;

pub use mode::{Mode, ModeContext, ModeEffect, PARTY_COLOR};
pub use state::{StateChange, StateContext, StateSelection, SystemState, PREVIOUS_SELECTOR};
