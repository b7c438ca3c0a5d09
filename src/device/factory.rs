//! Brand-selected device construction.

use super::{share, Detector, DeviceHandle, DeviceKind, Light, SoundSystem, Television};
use serde::{Deserialize, Serialize};

/// Catalog line to pick from when constructing a device.
///
/// Every device family has two preconfigured models; see the constructors of
/// each type for what they map to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    #[default]
    Primary,
    Secondary,
}

/// Build a new device of `kind`.
///
/// Returns `None` for [`DeviceKind::Alarm`]: the alarm is a singleton owned
/// by the home and is never manufactured on demand.
pub fn create(kind: DeviceKind, brand: Brand) -> Option<DeviceHandle> {
    let handle = match kind {
        DeviceKind::Light => share(Light::new(brand)),
        DeviceKind::Television => share(Television::new(brand)),
        DeviceKind::SoundSystem => share(SoundSystem::new(brand)),
        DeviceKind::SmokeDetector => share(Detector::smoke(brand)),
        DeviceKind::GasDetector => share(Detector::gas(brand)),
        DeviceKind::Alarm => return None,
    };
    Some(handle)
}

/// Build a matching smoke and gas detector from the same catalog line.
pub fn create_detector_pair(brand: Brand) -> (DeviceHandle, DeviceHandle) {
    (share(Detector::smoke(brand)), share(Detector::gas(brand)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Device;

    #[test]
    fn create_builds_requested_kind() {
        for kind in [
            DeviceKind::Light,
            DeviceKind::Television,
            DeviceKind::SoundSystem,
            DeviceKind::SmokeDetector,
            DeviceKind::GasDetector,
        ] {
            let device = create(kind, Brand::Secondary).unwrap();
            assert_eq!(device.borrow().kind(), kind);
        }
    }

    #[test]
    fn alarm_is_never_created() {
        assert!(create(DeviceKind::Alarm, Brand::Primary).is_none());
    }

    #[test]
    fn detector_pair_shares_brand() {
        let (smoke, gas) = create_detector_pair(Brand::Primary);

        assert_eq!(smoke.borrow().kind(), DeviceKind::SmokeDetector);
        assert_eq!(gas.borrow().kind(), DeviceKind::GasDetector);
        assert_eq!(smoke.borrow().info().brand(), "Nest");
        assert_eq!(gas.borrow().info().brand(), "Nest");
    }
}
