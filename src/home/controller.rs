//! The home: device registry plus mode, state and history coordination.

use super::error::HomeError;
use super::restore::{check_restorable, Restoration};
use super::HomeBuilder;
use crate::context::{Mode, ModeContext, StateChange, StateContext, SystemState};
use crate::core::Variant;
use crate::device::{
    clone_device, create, create_detector_pair, Alarm, Brand, Device, DeviceHandle, DeviceKind,
    PowerReport,
};
use crate::history::{HistoryManager, Snapshot};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt::Write;
use std::rc::Rc;
use std::slice;
use stillwater::validation::Validation;

/// What [`Home::change_state`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum StateOutcome {
    /// A real state became active and a snapshot was recorded.
    Switched(SystemState),
    /// History stepped back and was reapplied to the devices.
    Restored(Restoration),
}

/// Owns every device and sequences mode, state and history operations.
///
/// The registry lists devices in registration order with the alarm first.
/// Per-kind collections keep detector pairs aligned: the smoke detector at
/// position `i` is paired with the gas detector at position `i`.
///
/// # Example
///
/// ```rust
/// use hearth::device::{Device, DeviceKind};
/// use hearth::home::Home;
///
/// let mut home = Home::builder().build().unwrap();
/// home.start();
///
/// home.change_mode('C').unwrap();
/// assert!(home.devices(DeviceKind::Television)[0].borrow().is_powered_on());
/// assert!(!home.devices(DeviceKind::Light)[0].borrow().is_powered_on());
///
/// let restoration = home.undo().unwrap();
/// assert!(restoration.is_clean());
/// assert_eq!(home.current_mode().to_string(), "Normal");
/// assert!(home.devices(DeviceKind::Light)[0].borrow().is_powered_on());
/// ```
#[derive(Debug)]
pub struct Home {
    alarm: Rc<RefCell<Alarm>>,
    alarm_handle: DeviceHandle,
    registry: Vec<DeviceHandle>,
    lights: Vec<DeviceHandle>,
    televisions: Vec<DeviceHandle>,
    sound_systems: Vec<DeviceHandle>,
    smoke_detectors: Vec<DeviceHandle>,
    gas_detectors: Vec<DeviceHandle>,
    modes: ModeContext,
    states: StateContext,
    history: HistoryManager,
    running: bool,
}

impl Home {
    pub fn builder() -> HomeBuilder {
        HomeBuilder::new()
    }

    pub(crate) fn empty(history_capacity: usize) -> Self {
        let alarm = Rc::new(RefCell::new(Alarm::new()));
        let alarm_handle: DeviceHandle = alarm.clone();
        Self {
            registry: vec![Rc::clone(&alarm_handle)],
            alarm,
            alarm_handle,
            lights: Vec::new(),
            televisions: Vec::new(),
            sound_systems: Vec::new(),
            smoke_detectors: Vec::new(),
            gas_detectors: Vec::new(),
            modes: ModeContext::new(),
            states: StateContext::new(),
            history: HistoryManager::with_capacity(history_capacity),
            running: false,
        }
    }

    pub(crate) fn install_default_devices(&mut self) {
        for kind in [DeviceKind::Light, DeviceKind::Television] {
            if let Some(handle) = create(kind, Brand::Primary) {
                self.register(kind, handle);
            }
        }
        self.register_detector_pair(create_detector_pair(Brand::Primary));
        if let Some(handle) = create(DeviceKind::SoundSystem, Brand::Primary) {
            self.register(DeviceKind::SoundSystem, handle);
        }
    }

    fn collection(&self, kind: DeviceKind) -> &[DeviceHandle] {
        match kind {
            DeviceKind::Light => &self.lights,
            DeviceKind::Television => &self.televisions,
            DeviceKind::SoundSystem => &self.sound_systems,
            DeviceKind::SmokeDetector => &self.smoke_detectors,
            DeviceKind::GasDetector => &self.gas_detectors,
            DeviceKind::Alarm => slice::from_ref(&self.alarm_handle),
        }
    }

    fn collection_mut(&mut self, kind: DeviceKind) -> Option<&mut Vec<DeviceHandle>> {
        match kind {
            DeviceKind::Light => Some(&mut self.lights),
            DeviceKind::Television => Some(&mut self.televisions),
            DeviceKind::SoundSystem => Some(&mut self.sound_systems),
            DeviceKind::SmokeDetector => Some(&mut self.smoke_detectors),
            DeviceKind::GasDetector => Some(&mut self.gas_detectors),
            DeviceKind::Alarm => None,
        }
    }

    fn register(&mut self, kind: DeviceKind, handle: DeviceHandle) {
        tracing::debug!(device = %handle.borrow().name(), kind = %kind, "Device registered");
        if let Some(collection) = self.collection_mut(kind) {
            collection.push(Rc::clone(&handle));
            self.registry.push(handle);
        }
    }

    fn register_detector_pair(&mut self, (smoke, gas): (DeviceHandle, DeviceHandle)) {
        self.register(DeviceKind::SmokeDetector, smoke);
        self.register(DeviceKind::GasDetector, gas);
    }

    fn unregister(&mut self, handle: &DeviceHandle) {
        self.registry.retain(|entry| !Rc::ptr_eq(entry, handle));
    }

    /// Devices of one kind, in the order they were added.
    pub fn devices(&self, kind: DeviceKind) -> &[DeviceHandle] {
        self.collection(kind)
    }

    /// Every registered device, the alarm first.
    pub fn all_devices(&self) -> &[DeviceHandle] {
        &self.registry
    }

    pub fn alarm(&self) -> Ref<'_, Alarm> {
        self.alarm.borrow()
    }

    pub fn alarm_mut(&mut self) -> RefMut<'_, Alarm> {
        self.alarm.borrow_mut()
    }

    pub fn modes(&self) -> &ModeContext {
        &self.modes
    }

    pub fn states(&self) -> &StateContext {
        &self.states
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn current_mode(&self) -> Mode {
        self.modes.current()
    }

    pub fn current_state(&self) -> SystemState {
        self.states.current()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply the current mode and state, then record the initial snapshot.
    pub fn start(&mut self) -> PowerReport {
        self.running = true;
        tracing::info!(
            mode = self.modes.current_mode_name(),
            state = self.states.current_state_name(),
            devices = self.registry.len(),
            "Home starting"
        );
        let report = self.modes.apply(&self.lights, &self.televisions, &self.sound_systems);
        let state = self.states.current();
        self.states.select(state);
        self.save_snapshot();
        report
    }

    fn save_snapshot(&mut self) -> &Snapshot {
        self.history.snapshot(
            self.states.current_state_name(),
            self.modes.current_mode_name(),
            &self.registry,
        )
    }

    /// Add `count` devices of `kind`.
    ///
    /// The first new device takes its configuration from the last existing
    /// device of the same kind; the rest are clones of the first. Detectors
    /// come in smoke and gas pairs, so either detector kind adds `count`
    /// pairs. Returns how many devices were registered.
    ///
    /// # Errors
    ///
    /// Fails for a zero `count` or for the alarm.
    pub fn add_devices(
        &mut self,
        kind: DeviceKind,
        count: usize,
        brand: Brand,
    ) -> Result<usize, HomeError> {
        if count == 0 {
            return Err(HomeError::InvalidCount);
        }
        if kind.is_detector() {
            return Ok(self.add_detector_pairs(count, brand));
        }

        let first = create(kind, brand).ok_or(HomeError::SingletonDevice(kind))?;
        if let Some(last) = self.collection(kind).last() {
            first.borrow_mut().copy_configuration_from(&*last.borrow());
        }
        let clones: Vec<_> = (1..count).map(|_| clone_device(&first)).collect();

        self.register(kind, first);
        for clone in clones {
            self.register(kind, clone);
        }
        tracing::info!(kind = %kind, count, brand = ?brand, "Devices added");
        Ok(count)
    }

    fn add_detector_pairs(&mut self, count: usize, brand: Brand) -> usize {
        let (smoke, gas) = create_detector_pair(brand);
        if let Some(last) = self.smoke_detectors.last() {
            smoke.borrow_mut().copy_configuration_from(&*last.borrow());
        }
        if let Some(last) = self.gas_detectors.last() {
            gas.borrow_mut().copy_configuration_from(&*last.borrow());
        }

        let mut pairs = vec![(Rc::clone(&smoke), Rc::clone(&gas))];
        pairs.extend((1..count).map(|_| (clone_device(&smoke), clone_device(&gas))));
        for pair in pairs {
            self.register_detector_pair(pair);
        }
        tracing::info!(pairs = count, brand = ?brand, "Detector pairs added");
        count * 2
    }

    /// Remove the device at 1-based `index` among devices of `kind`.
    ///
    /// Detectors are removed as a pair: either kind removes both the smoke
    /// and the gas detector at `index`. Returns the names of the removed
    /// devices.
    ///
    /// # Errors
    ///
    /// Fails for an out-of-range index or for the alarm.
    pub fn remove_device(
        &mut self,
        kind: DeviceKind,
        index: usize,
    ) -> Result<Vec<String>, HomeError> {
        let len = self.collection(kind).len();
        let collection = self
            .collection_mut(kind)
            .ok_or(HomeError::SingletonDevice(kind))?;
        if index == 0 || index > len {
            return Err(HomeError::InvalidIndex { kind, index, len });
        }

        let mut removed = vec![collection.remove(index - 1)];
        let partner = match kind {
            DeviceKind::SmokeDetector => Some(&mut self.gas_detectors),
            DeviceKind::GasDetector => Some(&mut self.smoke_detectors),
            _ => None,
        };
        if let Some(partner) = partner.filter(|partner| index <= partner.len()) {
            removed.push(partner.remove(index - 1));
        }

        let mut names = Vec::with_capacity(removed.len());
        for handle in &removed {
            self.unregister(handle);
            let name = handle.borrow().name().to_string();
            tracing::info!(device = %name, "Device removed");
            names.push(name);
        }
        Ok(names)
    }

    /// Power on every device of `kind`. Detectors are always on and are
    /// left alone.
    pub fn power_on(&mut self, kind: DeviceKind) -> PowerReport {
        if kind.is_detector() {
            tracing::info!(kind = %kind, "Detectors are always on");
            return PowerReport::default();
        }
        power_all(self.collection(kind), true)
    }

    /// Power off every device of `kind`. Detectors are critical and are
    /// left alone.
    pub fn power_off(&mut self, kind: DeviceKind) -> PowerReport {
        if kind.is_detector() {
            tracing::warn!(kind = %kind, "Detectors cannot be powered off");
            return PowerReport::default();
        }
        power_all(self.collection(kind), false)
    }

    /// Power on every registered device.
    pub fn power_on_all(&mut self) -> PowerReport {
        power_all(&self.registry, true)
    }

    /// Power off every non-critical device family.
    pub fn power_off_all(&mut self) -> PowerReport {
        let mut report = PowerReport::default();
        for collection in [&self.lights, &self.televisions, &self.sound_systems] {
            merge(&mut report, power_all(collection, false));
        }
        report
    }

    /// Select a mode, apply it to the devices and record a snapshot.
    ///
    /// # Errors
    ///
    /// An unknown selector changes nothing.
    pub fn change_mode(&mut self, selector: char) -> crate::Result<PowerReport> {
        self.modes.set_mode(selector)?;
        let report = self.modes.apply(&self.lights, &self.televisions, &self.sound_systems);
        self.save_snapshot();
        Ok(report)
    }

    /// Select a system state and record a snapshot, or step back through
    /// history for the previous selector.
    ///
    /// # Errors
    ///
    /// Fails on an unknown selector or when there is nothing to go back to.
    pub fn change_state(&mut self, selector: char) -> crate::Result<StateOutcome> {
        match self.states.set_state(selector, &mut self.history)? {
            StateChange::Switched(state) => {
                self.save_snapshot();
                Ok(StateOutcome::Switched(state))
            }
            StateChange::Restored(snapshot) => Ok(StateOutcome::Restored(self.restore(snapshot))),
        }
    }

    /// Step back one snapshot and put it back onto the devices.
    ///
    /// # Errors
    ///
    /// Fails when there is nothing to go back to.
    pub fn undo(&mut self) -> crate::Result<Restoration> {
        let snapshot = self.history.undo_step()?.clone();
        Ok(self.restore(snapshot))
    }

    /// Step forward one snapshot and put it back onto the devices.
    ///
    /// # Errors
    ///
    /// Fails when there is nothing to go forward to.
    pub fn redo(&mut self) -> crate::Result<Restoration> {
        let snapshot = self.history.redo_step()?.clone();
        Ok(self.restore(snapshot))
    }

    fn restore(&mut self, snapshot: Snapshot) -> Restoration {
        let violations = match check_restorable(&snapshot, &self.registry) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        };
        for violation in &violations {
            tracing::warn!(%violation, "Snapshot entry not restored");
        }

        let mut report = PowerReport::default();
        for handle in &self.registry {
            let recorded = snapshot.power_of(handle.borrow().name());
            if let Some(on) = recorded {
                report.record(handle.borrow_mut().set_power(on));
            }
        }

        match Mode::from_name(snapshot.mode_name()) {
            Some(mode) => self.modes.select(mode),
            None => tracing::warn!(mode = snapshot.mode_name(), "Unknown mode in snapshot"),
        }
        match SystemState::from_name(snapshot.state_name()) {
            Some(state) => self.states.select(state),
            None => tracing::warn!(state = snapshot.state_name(), "Unknown state in snapshot"),
        }

        Restoration {
            snapshot,
            report,
            violations,
        }
    }

    /// Mark the device at 0-based registry position `index` as failed.
    ///
    /// # Errors
    ///
    /// Fails when no device sits at `index`.
    pub fn simulate_device_failure(&mut self, index: usize) -> Result<String, HomeError> {
        let handle = self.registry.get(index).ok_or(HomeError::NoSuchDevice {
            index,
            len: self.registry.len(),
        })?;
        let mut device = handle.borrow_mut();
        device.set_operation_mode(false);
        Ok(device.name().to_string())
    }

    /// Multi-line report of the active state, mode and every device.
    pub fn status(&self) -> String {
        let mut out = String::from("=== Home Status ===\n");
        let _ = writeln!(out, "{}", self.states.describe());
        let _ = writeln!(out, "{}", self.modes.describe());

        for kind in [
            DeviceKind::Light,
            DeviceKind::Television,
            DeviceKind::SmokeDetector,
            DeviceKind::GasDetector,
            DeviceKind::SoundSystem,
        ] {
            let devices = self.collection(kind);
            let _ = writeln!(out, "--- {kind} ({}) ---", devices.len());
            if devices.is_empty() {
                out.push_str("  (No devices)\n");
            }
            for (position, handle) in devices.iter().enumerate() {
                let _ = writeln!(out, "  [{}] {}", position + 1, handle.borrow().status());
            }
        }

        let _ = write!(out, "--- Alarm ---\n  {}", self.alarm.borrow().status());
        out
    }

    /// Power off every device. Critical devices refuse and stay on.
    pub fn shutdown(&mut self) -> PowerReport {
        let report = power_all(&self.registry, false);
        self.running = false;
        tracing::info!(
            switched = report.switched,
            refused = report.refused,
            "Home shut down"
        );
        report
    }
}

fn power_all(devices: &[DeviceHandle], on: bool) -> PowerReport {
    let mut report = PowerReport::default();
    for handle in devices {
        report.record(handle.borrow_mut().set_power(on));
    }
    report
}

fn merge(into: &mut PowerReport, other: PowerReport) {
    into.switched += other.switched;
    into.unchanged += other.unchanged;
    into.refused += other.refused;
}
