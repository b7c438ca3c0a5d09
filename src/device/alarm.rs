//! The home alarm.

use super::{Device, DeviceHandle, DeviceInfo, DeviceKind, Settings};

/// The single alarm of a home.
///
/// Critical and always on. A home creates exactly one and shares its handle;
/// cloning it yields the same instance.
#[derive(Debug)]
pub struct Alarm {
    info: DeviceInfo,
    ringing: bool,
    volume: u8,
}

impl Alarm {
    pub(crate) fn new() -> Self {
        let mut info = DeviceInfo::new("MSH", "Integrated Alarm");
        info.set_powered(true);
        Self {
            info,
            ringing: false,
            volume: 100,
        }
    }

    pub fn ring(&mut self) {
        self.ringing = true;
        tracing::warn!(volume = self.volume, "Alarm ringing");
    }

    pub fn stop(&mut self) {
        self.ringing = false;
        tracing::info!("Alarm stopped");
    }

    pub fn is_ringing(&self) -> bool {
        self.ringing
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Clamped to `0..=100`.
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }
}

impl Device for Alarm {
    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut DeviceInfo {
        &mut self.info
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Alarm
    }

    fn is_critical(&self) -> bool {
        true
    }

    fn details(&self) -> String {
        format!(
            "Volume: {}%, Status: {}",
            self.volume,
            if self.ringing { "RINGING!" } else { "Silent" }
        )
    }

    fn settings(&self) -> Settings {
        Settings::Alarm {
            volume: self.volume,
        }
    }

    fn apply_settings(&mut self, settings: &Settings) -> bool {
        let Settings::Alarm { volume } = *settings else {
            return false;
        };
        self.set_volume(volume);
        true
    }

    fn spawn(&self) -> Option<DeviceHandle> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alarm_is_on_and_silent() {
        let alarm = Alarm::new();

        assert!(alarm.is_powered_on());
        assert!(!alarm.is_ringing());
        assert_eq!(alarm.volume(), 100);
    }

    #[test]
    fn ring_and_stop() {
        let mut alarm = Alarm::new();

        alarm.ring();
        assert!(alarm.is_ringing());
        assert!(alarm.details().contains("RINGING!"));

        alarm.stop();
        assert!(!alarm.is_ringing());
    }

    #[test]
    fn alarm_has_no_fresh_instances() {
        assert!(Alarm::new().spawn().is_none());
    }
}
