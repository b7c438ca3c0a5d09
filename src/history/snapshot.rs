//! Immutable records of device power configurations.

use crate::device::DeviceHandle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Memento of every device's power flag plus the active mode and state
/// names at capture time.
///
/// Snapshots are values: once captured they never change, and holding one
/// does not keep any device alive.
///
/// # Example
///
/// ```rust
/// use hearth::history::Snapshot;
/// use std::collections::BTreeMap;
///
/// let power = BTreeMap::from([("Porch Light".to_string(), true)]);
/// let snapshot = Snapshot::new("Normal", "Party", power);
///
/// assert_eq!(snapshot.power_of("Porch Light"), Some(true));
/// assert_eq!(snapshot.power_of("Garage Light"), None);
/// assert_eq!(snapshot.mode_name(), "Party");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    id: Uuid,
    timestamp: DateTime<Utc>,
    state_name: String,
    mode_name: String,
    power: BTreeMap<String, bool>,
}

impl Snapshot {
    /// Build a snapshot from an explicit power map, stamped now.
    pub fn new(
        state_name: impl Into<String>,
        mode_name: impl Into<String>,
        power: BTreeMap<String, bool>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state_name: state_name.into(),
            mode_name: mode_name.into(),
            power,
        }
    }

    /// Record the current power flag of every device.
    pub fn capture<'a, I>(state_name: &str, mode_name: &str, devices: I) -> Self
    where
        I: IntoIterator<Item = &'a DeviceHandle>,
    {
        let power = devices
            .into_iter()
            .map(|handle| {
                let device = handle.borrow();
                (device.name().to_string(), device.is_powered_on())
            })
            .collect();
        Self::new(state_name, mode_name, power)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    pub fn mode_name(&self) -> &str {
        &self.mode_name
    }

    /// Device name to power flag, ordered by name.
    pub fn power_map(&self) -> &BTreeMap<String, bool> {
        &self.power
    }

    /// Recorded power flag of one device.
    pub fn power_of(&self, device_name: &str) -> Option<bool> {
        self.power.get(device_name).copied()
    }

    /// Number of devices recorded.
    pub fn device_count(&self) -> usize {
        self.power.len()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "State: {}, Mode: {}, Time: {}",
            self.state_name,
            self.mode_name,
            self.timestamp.format("%a %b %e %H:%M:%S %Y")
        )
    }
}
