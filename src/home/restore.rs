//! Checks and results for putting a snapshot back onto live devices.

use crate::device::{Device, DeviceHandle, PowerReport};
use crate::history::Snapshot;
use serde::Serialize;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A snapshot entry that cannot be honored on the current registry.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
pub enum RestoreViolation {
    #[error("device '{name}' no longer exists")]
    MissingDevice { name: String },

    #[error("critical device '{name}' cannot be restored to off")]
    CriticalOff { name: String },
}

/// Check every snapshot entry against the live devices, accumulating all
/// violations rather than stopping at the first.
pub fn check_restorable(
    snapshot: &Snapshot,
    devices: &[DeviceHandle],
) -> Validation<(), NonEmptyVec<RestoreViolation>> {
    if snapshot.power_map().is_empty() {
        return Validation::success(());
    }

    let checks: Vec<Validation<(), NonEmptyVec<RestoreViolation>>> = snapshot
        .power_map()
        .iter()
        .map(|(name, &on)| {
            let device = devices.iter().find(|handle| handle.borrow().name() == name);
            match device {
                None => Validation::fail(RestoreViolation::MissingDevice { name: name.clone() }),
                Some(handle) if !on && handle.borrow().is_critical() => {
                    Validation::fail(RestoreViolation::CriticalOff { name: name.clone() })
                }
                Some(_) => Validation::success(()),
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Outcome of an authoritative undo or redo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restoration {
    pub snapshot: Snapshot,
    pub report: PowerReport,
    /// Entries that could not be honored. Never aborts the restoration.
    pub violations: Vec<RestoreViolation>,
}

impl Restoration {
    /// Whether every snapshot entry was honored.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{share, Brand, Detector, Light};
    use std::collections::BTreeMap;

    fn name_of(handle: &DeviceHandle) -> String {
        handle.borrow().name().to_string()
    }

    #[test]
    fn matching_snapshot_passes() {
        let light = share(Light::new(Brand::Primary));
        let power = BTreeMap::from([(name_of(&light), true)]);
        let snapshot = Snapshot::new("Normal", "Normal", power);

        assert!(check_restorable(&snapshot, &[light]).is_success());
    }

    #[test]
    fn empty_snapshot_passes() {
        let snapshot = Snapshot::new("Normal", "Normal", BTreeMap::new());
        assert!(check_restorable(&snapshot, &[]).is_success());
    }

    #[test]
    fn restore_accumulates_all_violations() {
        let detector = share(Detector::smoke(Brand::Primary));
        let power = BTreeMap::from([
            (name_of(&detector), false),
            ("Gone Light #1".to_string(), true),
            ("Gone Light #2".to_string(), false),
        ]);
        let snapshot = Snapshot::new("Normal", "Normal", power);

        match check_restorable(&snapshot, &[detector]) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let missing = errors
                    .iter()
                    .filter(|e| matches!(e, RestoreViolation::MissingDevice { .. }))
                    .count();
                let critical = errors
                    .iter()
                    .filter(|e| matches!(e, RestoreViolation::CriticalOff { .. }))
                    .count();

                assert_eq!(missing, 2);
                assert_eq!(critical, 1);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn critical_device_recorded_on_is_fine() {
        let detector = share(Detector::gas(Brand::Secondary));
        let power = BTreeMap::from([(name_of(&detector), true)]);
        let snapshot = Snapshot::new("Sleep", "Evening", power);

        assert!(check_restorable(&snapshot, &[detector]).is_success());
    }

    #[test]
    fn violation_messages_name_the_device() {
        let violation = RestoreViolation::CriticalOff {
            name: "Nest Protect #abc".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "critical device 'Nest Protect #abc' cannot be restored to off"
        );
    }
}
