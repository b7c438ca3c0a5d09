//! Descriptive system states and history navigation.

use crate::core::{SelectorError, Variant};
use crate::history::{HistoryManager, Snapshot};
use crate::variant_enum;

/// Selector that steps back through history instead of naming a state.
pub const PREVIOUS_SELECTOR: char = 'P';

variant_enum! {
    /// Operating profile of the home. Informational only.
    #[derive(Default)]
    pub enum SystemState: "state" {
        #[default]
        Normal = 'N' => "Normal",
        HighPerformance = 'H' => "High Performance",
        LowPower = 'L' => "Low Power",
        Sleep = 'S' => "Sleep",
    }
}

impl SystemState {
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Standard operation mode - all features available",
            Self::HighPerformance => "Maximum performance - increased resource usage",
            Self::LowPower => "Energy saving mode - reduced functionality",
            Self::Sleep => "Minimal operation - only critical systems active",
        }
    }

    /// What running in this state means for the home.
    pub const fn notes(&self) -> [&'static str; 2] {
        match self {
            Self::Normal => [
                "All devices operating normally",
                "Full functionality available",
            ],
            Self::HighPerformance => ["Faster response times", "Higher energy consumption"],
            Self::LowPower => [
                "Reduced energy consumption",
                "Non-essential devices may be limited",
            ],
            Self::Sleep => [
                "Only security and detection systems active",
                "Minimal energy consumption",
            ],
        }
    }
}

/// A parsed state selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateSelection {
    State(SystemState),
    /// Step back one snapshot in history.
    Previous,
}

impl StateSelection {
    /// Parse a selector, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Unknown`] for anything that is neither a
    /// state selector nor [`PREVIOUS_SELECTOR`].
    pub fn parse(selector: char) -> Result<Self, SelectorError> {
        if selector.eq_ignore_ascii_case(&PREVIOUS_SELECTOR) {
            return Ok(Self::Previous);
        }
        SystemState::from_selector(selector).map(Self::State)
    }
}

/// What a call to [`StateContext::set_state`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// A real state became active.
    Switched(SystemState),
    /// History stepped back; the snapshot now under the cursor.
    Restored(Snapshot),
}

impl StateChange {
    /// Whether the caller should record a snapshot after this change.
    pub fn needs_snapshot(&self) -> bool {
        matches!(self, Self::Switched(_))
    }
}

/// Holds the active [`SystemState`].
///
/// # Example
///
/// ```rust
/// use hearth::context::{StateChange, StateContext, SystemState};
/// use hearth::history::HistoryManager;
///
/// let mut history = HistoryManager::new();
/// let mut states = StateContext::new();
///
/// let change = states.set_state('l', &mut history).unwrap();
/// assert_eq!(change, StateChange::Switched(SystemState::LowPower));
/// assert!(change.needs_snapshot());
///
/// // Nothing to go back to yet.
/// assert!(states.set_state('P', &mut history).is_err());
/// assert_eq!(states.current(), SystemState::LowPower);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateContext {
    current: SystemState,
}

impl StateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SystemState {
        self.current
    }

    pub fn current_state_name(&self) -> &'static str {
        self.current.name()
    }

    /// Act on a selector.
    ///
    /// A state selector switches the active state. The previous selector
    /// steps `history` back one snapshot and leaves the active state as is.
    ///
    /// # Errors
    ///
    /// Fails on an unknown selector or when history has nothing to go back
    /// to. The active state is unchanged in both cases.
    pub fn set_state(
        &mut self,
        selector: char,
        history: &mut HistoryManager,
    ) -> Result<StateChange, crate::Error> {
        let selection = StateSelection::parse(selector).map_err(|err| {
            tracing::warn!(selector = %selector, "Invalid state selection");
            err
        })?;
        match selection {
            StateSelection::State(state) => {
                self.select(state);
                Ok(StateChange::Switched(state))
            }
            StateSelection::Previous => {
                let snapshot = history.undo_step()?;
                Ok(StateChange::Restored(snapshot.clone()))
            }
        }
    }

    pub fn select(&mut self, state: SystemState) {
        self.current = state;
        tracing::info!(
            state = state.name(),
            description = state.description(),
            "System state changed"
        );
    }

    /// Display text for the active state.
    pub fn describe(&self) -> String {
        let [first, second] = self.current.notes();
        format!(
            "=== System State: {} ===\n  {}\n  - {first}\n  - {second}",
            self.current.name(),
            self.current.description()
        )
    }
}
