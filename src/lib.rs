//! Hearth: smart home device lifecycle, ambient modes and bounded undo/redo
//!
//! Hearth models a home as a registry of devices sharing one power
//! lifecycle, two selectable contexts on top of them, and a linear history of
//! power snapshots.
//!
//! # Core Concepts
//!
//! - **Device**: power lifecycle with critical devices that refuse to switch off
//! - **Mode**: ambient profile (Normal, Evening, Party, Cinema) fanned out over
//!   lights, televisions and sound systems
//! - **System state**: descriptive operating profile plus a "previous" step
//!   into history
//! - **History**: bounded snapshots with a cursor for undo and redo
//! - **Home**: the facade that sequences all of the above
//!
//! # Example
//!
//! ```rust
//! use hearth::device::{Brand, Device, DeviceKind};
//! use hearth::home::Home;
//!
//! let mut home = Home::builder().history_capacity(20).build().unwrap();
//! home.start();
//!
//! home.add_devices(DeviceKind::Light, 2, Brand::Secondary).unwrap();
//! home.change_mode('P').unwrap();
//! home.change_state('S').unwrap();
//!
//! assert_eq!(home.history().history_size(), 3);
//! assert!(home
//!     .devices(DeviceKind::Light)
//!     .iter()
//!     .all(|light| light.borrow().is_powered_on()));
//!
//! // Critical devices stay on.
//! home.shutdown();
//! assert!(home.alarm().is_powered_on());
//! ```

pub mod context;
pub mod core;
pub mod device;
mod error;
pub mod history;
pub mod home;

// Re-export commonly used types
pub use context::{Mode, ModeContext, StateContext, SystemState};
pub use self::core::{SelectorError, Variant};
pub use device::{Device, DeviceHandle, DeviceKind, PowerChange, PowerReport};
pub use error::{Error, Result};
pub use history::{HistoryError, HistoryManager, Snapshot};
pub use home::{Home, HomeBuilder};
