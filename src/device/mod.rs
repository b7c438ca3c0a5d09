//! Controllable home devices.
//!
//! Every device shares one power lifecycle (`Off`/`On`, plus an orthogonal
//! `Active`/`Failed` flag) implemented once as provided methods on the
//! [`Device`] trait. Concrete types plug in hooks, status details and their
//! configuration. Type-specific behavior is reached through capability
//! lookups ([`Device::appearance_mut`], [`Device::playback_mut`],
//! [`Device::as_detector_mut`]) rather than by inspecting concrete types.
//!
//! Devices are shared through [`DeviceHandle`]s. A registry owns the handles;
//! [`clone_device`] duplicates ordinary devices and hands singletons back as
//! the same handle.

mod alarm;
mod capability;
mod detector;
mod factory;
mod info;
mod light;
mod settings;
mod sound;
mod television;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub use alarm::Alarm;
pub use capability::{Appearance, Playback};
pub use detector::{Detector, Hazard};
pub use factory::{create, create_detector_pair, Brand};
pub use info::DeviceInfo;
pub use light::Light;
pub use settings::Settings;
pub use sound::SoundSystem;
pub use television::Television;

use serde::{Deserialize, Serialize};

/// Shared, single-threaded handle to a registered device.
pub type DeviceHandle = Rc<RefCell<dyn Device>>;

/// Wrap a concrete device into a [`DeviceHandle`].
pub fn share<D: Device + 'static>(device: D) -> DeviceHandle {
    Rc::new(RefCell::new(device))
}

/// Concrete device families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Light,
    Television,
    SoundSystem,
    SmokeDetector,
    GasDetector,
    Alarm,
}

impl DeviceKind {
    /// Display label used in status reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Television => "Television",
            Self::SoundSystem => "Sound System",
            Self::SmokeDetector => "Smoke Detector",
            Self::GasDetector => "Gas Detector",
            Self::Alarm => "Alarm",
        }
    }

    /// Whether devices of this kind are detectors.
    pub const fn is_detector(&self) -> bool {
        matches!(self, Self::SmokeDetector | Self::GasDetector)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a power command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerChange {
    /// The power flag flipped and the device hook ran.
    Switched,
    /// The device was already in the requested state.
    Unchanged,
    /// A critical device refused to power off.
    Refused,
}

/// Tally of power outcomes across a bulk command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerReport {
    pub switched: usize,
    pub unchanged: usize,
    pub refused: usize,
}

impl PowerReport {
    /// Count one outcome.
    pub fn record(&mut self, change: PowerChange) {
        match change {
            PowerChange::Switched => self.switched += 1,
            PowerChange::Unchanged => self.unchanged += 1,
            PowerChange::Refused => self.refused += 1,
        }
    }

    /// Total number of devices addressed.
    pub fn total(&self) -> usize {
        self.switched + self.unchanged + self.refused
    }
}

/// A controllable home device.
///
/// Implementors supply identity, hooks and configuration; the power
/// lifecycle is provided. The lifecycle runs the same sequence for every
/// device: status check, then the hook, then the flag update. Critical
/// devices short-circuit `power_off` before the hook runs.
pub trait Device: fmt::Debug {
    /// Shared base fields.
    fn info(&self) -> &DeviceInfo;

    /// Mutable access to the shared base fields.
    fn info_mut(&mut self) -> &mut DeviceInfo;

    /// Concrete family.
    fn kind(&self) -> DeviceKind;

    /// Critical devices can never be powered off.
    fn is_critical(&self) -> bool {
        false
    }

    /// Activation side effect, run while switching on.
    fn on_power_on(&mut self) {}

    /// Deactivation side effect, run while switching off.
    fn on_power_off(&mut self) {}

    /// Type-specific part of the status line.
    fn details(&self) -> String;

    /// Current mutable configuration.
    fn settings(&self) -> Settings;

    /// Adopt a configuration. Returns `false` when the settings belong to a
    /// different device family and nothing changed.
    fn apply_settings(&mut self, settings: &Settings) -> bool;

    /// A fresh instance of the same concrete type with default construction
    /// parameters, or `None` for singletons.
    fn spawn(&self) -> Option<DeviceHandle>;

    /// Color and brightness control, if the device has it.
    fn appearance_mut(&mut self) -> Option<&mut dyn Appearance> {
        None
    }

    /// Music playback control, if the device has it.
    fn playback_mut(&mut self) -> Option<&mut dyn Playback> {
        None
    }

    /// Detector access, if the device is one.
    fn as_detector(&self) -> Option<&Detector> {
        None
    }

    /// Mutable detector access, if the device is one.
    fn as_detector_mut(&mut self) -> Option<&mut Detector> {
        None
    }

    fn name(&self) -> &str {
        self.info().name()
    }

    fn is_powered_on(&self) -> bool {
        self.info().is_powered_on()
    }

    fn is_active(&self) -> bool {
        self.info().is_active()
    }

    /// Switch `Off → On`. No-op when already on.
    fn power_on(&mut self) -> PowerChange {
        if self.is_powered_on() {
            tracing::debug!(device = %self.name(), "Already powered on");
            return PowerChange::Unchanged;
        }
        self.on_power_on();
        self.info_mut().set_powered(true);
        tracing::info!(device = %self.name(), "Powered on");
        PowerChange::Switched
    }

    /// Switch `On → Off`. Critical devices refuse and stay on.
    fn power_off(&mut self) -> PowerChange {
        if self.is_critical() {
            tracing::warn!(
                device = %self.name(),
                "Critical device cannot be powered off"
            );
            return PowerChange::Refused;
        }
        if !self.is_powered_on() {
            tracing::debug!(device = %self.name(), "Already powered off");
            return PowerChange::Unchanged;
        }
        self.on_power_off();
        self.info_mut().set_powered(false);
        tracing::info!(device = %self.name(), "Powered off");
        PowerChange::Switched
    }

    /// Drive the device towards `on`.
    fn set_power(&mut self, on: bool) -> PowerChange {
        if on {
            self.power_on()
        } else {
            self.power_off()
        }
    }

    /// Mark the hardware as working (`true`) or failed (`false`). Does not
    /// touch the power flag.
    fn set_operation_mode(&mut self, active: bool) {
        self.info_mut().set_active(active);
        if active {
            tracing::info!(device = %self.name(), "Operation restored");
        } else {
            tracing::warn!(device = %self.name(), "Device marked as failed");
        }
    }

    /// Human readable composite of base and type-specific fields.
    fn status(&self) -> String {
        format!("{} | {}", self.info().summary(self.kind()), self.details())
    }

    /// Copy configuration from another device of the same family. Power and
    /// detection flags are never copied.
    fn copy_configuration_from(&mut self, other: &dyn Device) -> bool {
        self.apply_settings(&other.settings())
    }
}

/// Duplicate a device the way a prototype would: a new default instance of
/// the same type carrying the source's configuration. Singletons are
/// returned as the same handle.
pub fn clone_device(handle: &DeviceHandle) -> DeviceHandle {
    let source = handle.borrow();
    match source.spawn() {
        Some(fresh) => {
            fresh.borrow_mut().copy_configuration_from(&*source);
            fresh
        }
        None => Rc::clone(handle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_then_off_returns_to_off() {
        let mut light = Light::new(Brand::Primary);

        assert_eq!(light.power_on(), PowerChange::Switched);
        assert!(light.is_powered_on());
        assert_eq!(light.power_off(), PowerChange::Switched);
        assert!(!light.is_powered_on());
    }

    #[test]
    fn repeated_power_commands_are_idempotent() {
        let mut tv = Television::new(Brand::Secondary);

        assert_eq!(tv.power_off(), PowerChange::Unchanged);
        assert!(!tv.is_powered_on());

        tv.power_on();
        assert_eq!(tv.power_on(), PowerChange::Unchanged);
        assert!(tv.is_powered_on());
    }

    #[test]
    fn critical_devices_refuse_power_off() {
        let mut detector = Detector::smoke(Brand::Primary);
        let mut alarm = Alarm::new();

        assert_eq!(detector.power_off(), PowerChange::Refused);
        assert_eq!(alarm.power_off(), PowerChange::Refused);
        assert!(detector.is_powered_on());
        assert!(alarm.is_powered_on());
    }

    #[test]
    fn operation_mode_does_not_touch_power() {
        let mut sound = SoundSystem::new(Brand::Primary);
        sound.power_on();

        sound.set_operation_mode(false);
        assert!(!sound.is_active());
        assert!(sound.is_powered_on());

        sound.set_operation_mode(true);
        assert!(sound.is_active());
    }

    #[test]
    fn failed_devices_still_accept_power_commands() {
        let mut light = Light::new(Brand::Primary);
        light.set_operation_mode(false);

        assert_eq!(light.power_on(), PowerChange::Switched);
        assert!(light.is_powered_on());
    }

    #[test]
    fn status_combines_base_and_details() {
        let mut light = Light::new(Brand::Primary);
        light.power_on();

        let status = light.status();
        assert!(status.starts_with(light.name()));
        assert!(status.contains("Power: ON"));
        assert!(status.contains("Color: white"));
        assert!(status.contains("Brightness: 100%"));
    }

    #[test]
    fn clone_copies_configuration_but_not_power() {
        let source = share(Light::new(Brand::Secondary));
        {
            let mut light = source.borrow_mut();
            light.power_on();
            let appearance = light.appearance_mut().unwrap();
            appearance.set_color("blue");
            appearance.set_brightness(40);
        }

        let copy = clone_device(&source);

        assert!(!Rc::ptr_eq(&source, &copy));
        let copy = copy.borrow();
        assert_eq!(copy.kind(), DeviceKind::Light);
        assert_eq!(copy.info().brand(), "IKEA");
        assert_ne!(copy.name(), source.borrow().name());
        assert!(!copy.is_powered_on());
        assert_eq!(
            copy.settings(),
            Settings::Light {
                color: "blue".to_string(),
                brightness: 40
            }
        );
    }

    #[test]
    fn clone_of_singleton_is_identity() {
        let alarm = share(Alarm::new());

        let copy = clone_device(&alarm);

        assert!(Rc::ptr_eq(&alarm, &copy));
    }

    #[test]
    fn clone_of_detector_keeps_sensitivity_but_not_detection() {
        let source = share(Detector::gas(Brand::Secondary));
        {
            let mut device = source.borrow_mut();
            let detector = device.as_detector_mut().unwrap();
            detector.set_sensitivity(9);
            detector.set_measurement(50);
            assert!(detector.is_detected());
        }

        let copy = clone_device(&source);
        let copy = copy.borrow();
        let detector = copy.as_detector().unwrap();

        assert_eq!(detector.sensitivity(), 9);
        assert_eq!(detector.measurement(), 0);
        assert!(!detector.is_detected());
        assert!(copy.is_powered_on());
    }

    #[test]
    fn copy_configuration_ignores_other_families() {
        let mut light = Light::new(Brand::Primary);
        let tv = Television::new(Brand::Primary);

        assert!(!light.copy_configuration_from(&tv));
        assert_eq!(light.appearance_mut().unwrap().color(), "white");
    }

    #[test]
    fn power_report_counts_outcomes() {
        let mut report = PowerReport::default();
        report.record(PowerChange::Switched);
        report.record(PowerChange::Switched);
        report.record(PowerChange::Refused);

        assert_eq!(report.switched, 2);
        assert_eq!(report.refused, 1);
        assert_eq!(report.total(), 3);
    }
}
