//! Lights.

use super::{share, Appearance, Brand, Device, DeviceHandle, DeviceInfo, DeviceKind, Settings};

const DEFAULT_COLOR: &str = "white";

/// A dimmable, colored light.
#[derive(Debug)]
pub struct Light {
    info: DeviceInfo,
    brand: Brand,
    color: String,
    brightness: u8,
}

impl Light {
    /// Philips Hue for [`Brand::Primary`], IKEA Tradfri otherwise.
    pub fn new(brand: Brand) -> Self {
        let (maker, model) = match brand {
            Brand::Primary => ("Philips", "Hue White A19"),
            Brand::Secondary => ("IKEA", "Tradfri E27"),
        };
        Self {
            info: DeviceInfo::new(maker, model),
            brand,
            color: DEFAULT_COLOR.to_string(),
            brightness: 100,
        }
    }
}

impl Appearance for Light {
    fn color(&self) -> &str {
        &self.color
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
        tracing::debug!(device = %self.info.name(), color, "Color set");
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level.min(100);
        tracing::debug!(device = %self.info.name(), brightness = self.brightness, "Brightness set");
    }
}

impl Device for Light {
    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut DeviceInfo {
        &mut self.info
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Light
    }

    fn on_power_on(&mut self) {
        tracing::debug!(
            device = %self.info.name(),
            color = %self.color,
            brightness = self.brightness,
            "Illuminating"
        );
    }

    fn details(&self) -> String {
        format!("Color: {}, Brightness: {}%", self.color, self.brightness)
    }

    fn settings(&self) -> Settings {
        Settings::Light {
            color: self.color.clone(),
            brightness: self.brightness,
        }
    }

    fn apply_settings(&mut self, settings: &Settings) -> bool {
        let Settings::Light { color, brightness } = settings else {
            return false;
        };
        self.color.clone_from(color);
        self.brightness = (*brightness).min(100);
        true
    }

    fn spawn(&self) -> Option<DeviceHandle> {
        Some(share(Light::new(self.brand)))
    }

    fn appearance_mut(&mut self) -> Option<&mut dyn Appearance> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brands_select_catalog_entries() {
        let hue = Light::new(Brand::Primary);
        let tradfri = Light::new(Brand::Secondary);

        assert_eq!(hue.info().brand(), "Philips");
        assert_eq!(hue.info().model(), "Hue White A19");
        assert_eq!(tradfri.info().brand(), "IKEA");
    }

    #[test]
    fn new_light_is_white_and_bright() {
        let light = Light::new(Brand::Primary);

        assert_eq!(light.color(), "white");
        assert_eq!(light.brightness(), 100);
        assert!(!light.is_critical());
        assert!(!light.is_powered_on());
    }

    #[test]
    fn brightness_is_clamped() {
        let mut light = Light::new(Brand::Primary);
        light.set_brightness(250);
        assert_eq!(light.brightness(), 100);
    }

    #[test]
    fn appearance_capability_is_exposed() {
        let mut light = Light::new(Brand::Primary);
        light.appearance_mut().unwrap().set_color("multicolor");
        assert_eq!(light.color(), "multicolor");
        assert!(light.playback_mut().is_none());
    }
}
