//! Base fields shared by every device.

use super::DeviceKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and lifecycle flags common to all devices.
///
/// The name embeds the first eight hex digits of a random id, so two devices
/// of the same model (including prototype clones) never share a name.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeviceInfo {
    id: Uuid,
    name: String,
    brand: String,
    model: String,
    powered: bool,
    active: bool,
}

impl DeviceInfo {
    /// New, powered off and active.
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        let id = Uuid::new_v4();
        let brand = brand.into();
        let model = model.into();
        let hex = id.simple().to_string();
        let name = format!("{brand} {model} #{}", &hex[..8]);
        Self {
            id,
            name,
            brand,
            model,
            powered: false,
            active: true,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_powered_on(&self) -> bool {
        self.powered
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_powered(&mut self, powered: bool) {
        self.powered = powered;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Base part of a status line.
    pub fn summary(&self, kind: DeviceKind) -> String {
        format!(
            "{} [{}] {} {} | Power: {}, Operation: {}",
            self.name,
            kind,
            self.brand,
            self.model,
            if self.powered { "ON" } else { "OFF" },
            if self.active { "Active" } else { "Failed" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_info_is_off_and_active() {
        let info = DeviceInfo::new("Acme", "One");

        assert!(!info.is_powered_on());
        assert!(info.is_active());
        assert_eq!(info.brand(), "Acme");
        assert_eq!(info.model(), "One");
    }

    #[test]
    fn names_are_unique_per_instance() {
        let first = DeviceInfo::new("Acme", "One");
        let second = DeviceInfo::new("Acme", "One");

        assert!(first.name().starts_with("Acme One #"));
        assert_ne!(first.name(), second.name());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn summary_reports_flags() {
        let mut info = DeviceInfo::new("Acme", "One");
        info.set_powered(true);
        info.set_active(false);

        let summary = info.summary(DeviceKind::Light);
        assert!(summary.contains("[Light]"));
        assert!(summary.contains("Power: ON"));
        assert!(summary.contains("Operation: Failed"));
    }
}
