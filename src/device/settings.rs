//! Copyable device configuration.

use serde::{Deserialize, Serialize};

/// The mutable configuration of a device, as a value.
///
/// Prototype cloning and configuration copies exchange these instead of
/// looking at concrete device types. Power and detection flags are state,
/// not configuration, and never appear here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Settings {
    Light { color: String, brightness: u8 },
    Television { volume: u8, channel: u32 },
    SoundSystem { volume: u8, source: String },
    Detector { sensitivity: u8 },
    Alarm { volume: u8 },
}
