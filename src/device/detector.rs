//! Smoke and gas detectors.

use super::{share, Brand, Device, DeviceHandle, DeviceInfo, DeviceKind, Settings};
use serde::{Deserialize, Serialize};

/// What a detector measures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hazard {
    Smoke,
    Gas { gas_type: String },
}

/// A critical device that raises a sticky alert when its measurement
/// crosses a sensitivity-dependent threshold.
///
/// The trigger fires when `measurement > (10 - sensitivity) * 10`, so a
/// higher sensitivity means a lower threshold. Once detected, the alert stays
/// raised until [`Detector::reset_detection`] is called. A failed detector
/// (operation mode inactive) does not evaluate its trigger.
///
/// # Example
///
/// ```rust
/// use hearth::device::{Brand, Detector};
///
/// let mut detector = Detector::smoke(Brand::Primary); // sensitivity 7
/// assert_eq!(detector.threshold(), 30);
///
/// assert!(!detector.set_measurement(30));
/// assert!(detector.set_measurement(31));
/// assert!(detector.set_measurement(0)); // sticky
///
/// detector.reset_detection();
/// assert!(!detector.is_detected());
/// ```
#[derive(Debug)]
pub struct Detector {
    info: DeviceInfo,
    brand: Brand,
    hazard: Hazard,
    sensitivity: u8,
    measurement: u8,
    detected: bool,
}

impl Detector {
    /// Nest Protect (sensitivity 7) for [`Brand::Primary`], First Alert
    /// Onelink (sensitivity 6) otherwise.
    pub fn smoke(brand: Brand) -> Self {
        let (maker, model, sensitivity) = match brand {
            Brand::Primary => ("Nest", "Protect 2nd Gen", 7),
            Brand::Secondary => ("First Alert", "Onelink Safe & Sound", 6),
        };
        Self::with_hazard(brand, maker, model, Hazard::Smoke, sensitivity)
    }

    /// Nest Protect CO (sensitivity 8) for [`Brand::Primary`], Kidde
    /// Nighthawk (sensitivity 7) otherwise.
    pub fn gas(brand: Brand) -> Self {
        let (maker, model, gas_type, sensitivity) = match brand {
            Brand::Primary => ("Nest", "Protect CO", "Carbon Monoxide", 8),
            Brand::Secondary => ("Kidde", "Nighthawk", "Natural Gas/Propane", 7),
        };
        let hazard = Hazard::Gas {
            gas_type: gas_type.to_string(),
        };
        Self::with_hazard(brand, maker, model, hazard, sensitivity)
    }

    fn with_hazard(
        brand: Brand,
        maker: &str,
        model: &str,
        hazard: Hazard,
        sensitivity: u8,
    ) -> Self {
        let mut info = DeviceInfo::new(maker, model);
        info.set_powered(true);
        Self {
            info,
            brand,
            hazard,
            sensitivity,
            measurement: 0,
            detected: false,
        }
    }

    pub fn hazard(&self) -> &Hazard {
        &self.hazard
    }

    pub fn sensitivity(&self) -> u8 {
        self.sensitivity
    }

    /// Clamped to `1..=10`.
    pub fn set_sensitivity(&mut self, level: u8) {
        self.sensitivity = level.clamp(1, 10);
        tracing::debug!(
            device = %self.info.name(),
            sensitivity = self.sensitivity,
            "Sensitivity set"
        );
    }

    /// Level the measurement must exceed to trigger.
    pub fn threshold(&self) -> u8 {
        (10 - self.sensitivity) * 10
    }

    pub fn measurement(&self) -> u8 {
        self.measurement
    }

    /// Record a new measurement (clamped to `0..=100`) and evaluate the
    /// trigger. Returns whether the detector is in the detected state.
    pub fn set_measurement(&mut self, level: u8) -> bool {
        self.measurement = level.min(100);
        self.evaluate()
    }

    /// Evaluate the trigger against the current measurement.
    pub fn evaluate(&mut self) -> bool {
        if !self.info.is_powered_on() || !self.info.is_active() {
            return self.detected;
        }
        if self.measurement > self.threshold() && !self.detected {
            self.detected = true;
            tracing::warn!(
                device = %self.info.name(),
                hazard = ?self.hazard,
                level = self.measurement,
                "Hazard detected"
            );
        }
        self.detected
    }

    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// Clear a raised alert. The measurement is left as is.
    pub fn reset_detection(&mut self) {
        self.detected = false;
        tracing::info!(device = %self.info.name(), "Detection reset");
    }
}

impl Device for Detector {
    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut DeviceInfo {
        &mut self.info
    }

    fn kind(&self) -> DeviceKind {
        match self.hazard {
            Hazard::Smoke => DeviceKind::SmokeDetector,
            Hazard::Gas { .. } => DeviceKind::GasDetector,
        }
    }

    fn is_critical(&self) -> bool {
        true
    }

    fn on_power_on(&mut self) {
        tracing::debug!(device = %self.info.name(), "Monitoring activated");
    }

    fn details(&self) -> String {
        let reading = match &self.hazard {
            Hazard::Smoke => format!("Smoke Level: {}%", self.measurement),
            Hazard::Gas { gas_type } => format!("Gas Level: {}% ({gas_type})", self.measurement),
        };
        format!(
            "Sensitivity: {}/10, Detection: {} | {reading}",
            self.sensitivity,
            if self.detected { "ALERT!" } else { "Clear" }
        )
    }

    fn settings(&self) -> Settings {
        Settings::Detector {
            sensitivity: self.sensitivity,
        }
    }

    fn apply_settings(&mut self, settings: &Settings) -> bool {
        let Settings::Detector { sensitivity } = *settings else {
            return false;
        };
        self.sensitivity = sensitivity.clamp(1, 10);
        true
    }

    fn spawn(&self) -> Option<DeviceHandle> {
        let fresh = match self.hazard {
            Hazard::Smoke => Detector::smoke(self.brand),
            Hazard::Gas { .. } => Detector::gas(self.brand),
        };
        Some(share(fresh))
    }

    fn as_detector(&self) -> Option<&Detector> {
        Some(self)
    }

    fn as_detector_mut(&mut self) -> Option<&mut Detector> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::PowerChange;

    #[test]
    fn detectors_start_powered_and_critical() {
        let detector = Detector::gas(Brand::Primary);

        assert!(detector.is_powered_on());
        assert!(detector.is_critical());
        assert_eq!(detector.kind(), DeviceKind::GasDetector);
    }

    #[test]
    fn power_off_is_refused() {
        let mut detector = Detector::smoke(Brand::Secondary);

        assert_eq!(detector.power_off(), PowerChange::Refused);
        assert!(detector.is_powered_on());
    }

    #[test]
    fn threshold_follows_sensitivity() {
        let mut detector = Detector::smoke(Brand::Primary);

        detector.set_sensitivity(10);
        assert_eq!(detector.threshold(), 0);
        detector.set_sensitivity(1);
        assert_eq!(detector.threshold(), 90);
    }

    #[test]
    fn sensitivity_is_clamped() {
        let mut detector = Detector::smoke(Brand::Primary);

        detector.set_sensitivity(0);
        assert_eq!(detector.sensitivity(), 1);
        detector.set_sensitivity(42);
        assert_eq!(detector.sensitivity(), 10);
    }

    #[test]
    fn measurement_at_threshold_does_not_trigger() {
        let mut detector = Detector::gas(Brand::Primary); // sensitivity 8

        assert!(!detector.set_measurement(20));
        assert!(detector.set_measurement(21));
    }

    #[test]
    fn measurement_is_clamped() {
        let mut detector = Detector::smoke(Brand::Primary);
        detector.set_measurement(200);
        assert_eq!(detector.measurement(), 100);
    }

    #[test]
    fn detection_is_sticky_until_reset() {
        let mut detector = Detector::smoke(Brand::Primary);

        detector.set_measurement(90);
        detector.set_measurement(5);
        assert!(detector.is_detected());
        assert!(detector.evaluate());

        detector.reset_detection();
        assert!(!detector.is_detected());
        assert!(!detector.evaluate());
    }

    #[test]
    fn failed_detector_does_not_trigger() {
        let mut detector = Detector::smoke(Brand::Primary);
        detector.set_operation_mode(false);

        assert!(!detector.set_measurement(100));

        detector.set_operation_mode(true);
        assert!(detector.evaluate());
    }

    #[test]
    fn details_show_reading() {
        let mut detector = Detector::gas(Brand::Secondary);
        detector.set_measurement(12);

        let details = detector.details();
        assert!(details.contains("Gas Level: 12% (Natural Gas/Propane)"));
        assert!(details.contains("Detection: Clear"));
    }
}
