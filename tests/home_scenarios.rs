//! End-to-end scenarios across devices, contexts and history.

use hearth::context::{Mode, ModeContext, SystemState, PARTY_COLOR};
use hearth::device::{share, Brand, Device, DeviceHandle, DeviceKind, Light, Television};
use hearth::history::{HistoryError, HistoryManager};
use hearth::home::{Home, RestoreViolation, StateOutcome};
use hearth::Error;

fn started_home() -> Home {
    let mut home = Home::builder().build().unwrap();
    home.start();
    home
}

fn power_of(devices: &[DeviceHandle]) -> Vec<bool> {
    devices.iter().map(|h| h.borrow().is_powered_on()).collect()
}

#[test]
fn party_then_cinema() {
    let lights: Vec<DeviceHandle> = (0..3).map(|_| share(Light::new(Brand::Primary))).collect();
    let tvs = vec![share(Television::new(Brand::Primary))];
    let mut modes = ModeContext::new();

    modes.set_mode('P').unwrap();
    modes.apply(&lights, &tvs, &[]);

    for handle in &lights {
        let mut light = handle.borrow_mut();
        assert!(light.is_powered_on());
        assert_eq!(light.appearance_mut().unwrap().color(), PARTY_COLOR);
    }

    modes.set_mode('C').unwrap();
    modes.apply(&lights, &tvs, &[]);

    assert_eq!(power_of(&lights), vec![false, false, false]);
    assert_eq!(power_of(&tvs), vec![true]);
}

#[test]
fn history_keeps_the_earlier_power_map() {
    let light = share(Light::new(Brand::Primary));
    let tv = share(Television::new(Brand::Primary));
    let devices = vec![light.clone(), tv.clone()];
    light.borrow_mut().power_on();
    tv.borrow_mut().power_on();

    let mut history = HistoryManager::new();
    history.snapshot("Normal", "Normal", &devices);
    assert_eq!(history.undo_step().unwrap_err(), HistoryError::NoPrevious);

    tv.borrow_mut().power_off();
    history.snapshot("Normal", "Normal", &devices);

    let previous = history.undo_step().unwrap();
    assert_eq!(previous.power_of(light.borrow().name()), Some(true));
    assert_eq!(previous.power_of(tv.borrow().name()), Some(true));

    // Navigation alone does not touch live devices.
    assert!(!tv.borrow().is_powered_on());
}

#[test]
fn home_undo_is_authoritative() {
    let mut home = started_home();
    home.change_mode('P').unwrap();
    home.change_state('H').unwrap();
    home.power_off(DeviceKind::Light);

    home.undo().unwrap();
    assert_eq!(home.current_mode(), Mode::Party);
    assert_eq!(home.current_state(), SystemState::Normal);
    assert_eq!(power_of(home.devices(DeviceKind::Light)), vec![true]);
    assert_eq!(power_of(home.devices(DeviceKind::SoundSystem)), vec![true]);

    home.undo().unwrap();
    assert_eq!(home.current_mode(), Mode::Normal);
    assert_eq!(power_of(home.devices(DeviceKind::SoundSystem)), vec![false]);

    home.redo().unwrap();
    home.redo().unwrap();
    assert_eq!(home.current_state(), SystemState::HighPerformance);
    assert!(matches!(home.redo(), Err(Error::History(HistoryError::NoNext))));
}

#[test]
fn branching_discards_redo() {
    let mut home = started_home();
    home.change_mode('E').unwrap();

    home.undo().unwrap();
    home.change_mode('C').unwrap();

    assert_eq!(home.history().history_size(), 2);
    assert!(home.redo().is_err());
    assert_eq!(home.history().current().unwrap().mode_name(), "Cinema");
}

#[test]
fn previous_state_restores_devices() {
    let mut home = started_home();
    home.change_mode('C').unwrap();

    match home.change_state('p').unwrap() {
        StateOutcome::Restored(restoration) => {
            assert_eq!(restoration.snapshot.mode_name(), "Normal");
            assert!(restoration.is_clean());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(home.current_mode(), Mode::Normal);
    assert_eq!(power_of(home.devices(DeviceKind::Television)), vec![false]);
}

#[test]
fn restore_reports_every_violation() {
    let mut home = started_home();
    home.add_devices(DeviceKind::Television, 2, Brand::Secondary)
        .unwrap();
    home.change_mode('N').unwrap();

    home.remove_device(DeviceKind::Television, 1).unwrap();
    home.remove_device(DeviceKind::Television, 1).unwrap();
    home.change_mode('E').unwrap();

    let restoration = home.undo().unwrap();

    assert_eq!(restoration.violations.len(), 2);
    assert!(restoration
        .violations
        .iter()
        .all(|v| matches!(v, RestoreViolation::MissingDevice { .. })));
    // The remaining devices were still restored.
    assert_eq!(power_of(home.devices(DeviceKind::Light)), vec![true]);
}

#[test]
fn alarm_clone_is_the_same_instance() {
    let home = started_home();
    let alarm = &home.devices(DeviceKind::Alarm)[0];

    let copy = hearth::device::clone_device(alarm);

    assert!(std::rc::Rc::ptr_eq(alarm, &copy));
    assert_eq!(home.all_devices().len(), 6);
}

#[test]
fn failed_devices_follow_modes() {
    let mut home = started_home();
    let name = home.simulate_device_failure(1).unwrap();
    assert!(name.starts_with("Philips Hue White A19"));

    home.change_mode('E').unwrap();

    let light = home.devices(DeviceKind::Light)[0].borrow();
    assert!(!light.is_active());
    assert!(!light.is_powered_on());
    assert!(light.status().contains("Operation: Failed"));
}

#[test]
fn shutdown_leaves_only_critical_devices_on() {
    let mut home = started_home();
    home.change_mode('P').unwrap();

    home.shutdown();

    for handle in home.all_devices() {
        let device = handle.borrow();
        assert_eq!(device.is_powered_on(), device.is_critical(), "{}", device.name());
    }
}
