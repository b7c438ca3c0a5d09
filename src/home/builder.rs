//! Fluent construction of a [`Home`].

use super::error::BuildError;
use super::Home;
use crate::history::MAX_HISTORY;

/// Builder for a [`Home`].
///
/// By default the home keeps [`MAX_HISTORY`] snapshots and starts with one
/// light, television, detector pair and sound system of the primary brand.
///
/// # Example
///
/// ```rust
/// use hearth::home::HomeBuilder;
///
/// let home = HomeBuilder::new()
///     .history_capacity(10)
///     .default_devices(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(home.history().capacity(), 10);
/// assert_eq!(home.all_devices().len(), 1); // the alarm
/// ```
#[derive(Clone, Debug)]
pub struct HomeBuilder {
    history_capacity: usize,
    default_devices: bool,
}

impl HomeBuilder {
    pub fn new() -> Self {
        Self {
            history_capacity: MAX_HISTORY,
            default_devices: true,
        }
    }

    /// Number of snapshots to retain (must be non-zero).
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Whether to install the default device set.
    pub fn default_devices(mut self, install: bool) -> Self {
        self.default_devices = install;
        self
    }

    /// Build the home.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Home, BuildError> {
        if self.history_capacity == 0 {
            return Err(BuildError::ZeroHistoryCapacity);
        }

        let mut home = Home::empty(self.history_capacity);
        if self.default_devices {
            home.install_default_devices();
        }
        Ok(home)
    }
}

impl Default for HomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
