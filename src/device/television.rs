//! Televisions.

use super::{share, Brand, Device, DeviceHandle, DeviceInfo, DeviceKind, Settings};

/// A smart television.
#[derive(Debug)]
pub struct Television {
    info: DeviceInfo,
    brand: Brand,
    screen_size: u16,
    resolution: String,
    smart: bool,
    volume: u8,
    channel: u32,
}

impl Television {
    /// Samsung QLED 65" for [`Brand::Primary`], LG OLED 55" otherwise.
    pub fn new(brand: Brand) -> Self {
        let (maker, model, screen_size) = match brand {
            Brand::Primary => ("Samsung", "QLED Q80B", 65),
            Brand::Secondary => ("LG", "OLED C3", 55),
        };
        Self {
            info: DeviceInfo::new(maker, model),
            brand,
            screen_size,
            resolution: "4K".to_string(),
            smart: true,
            volume: 30,
            channel: 1,
        }
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Clamped to `0..=100`.
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        tracing::debug!(device = %self.info.name(), volume = self.volume, "Volume set");
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    /// Channels start at 1.
    pub fn set_channel(&mut self, channel: u32) {
        self.channel = channel.max(1);
        tracing::debug!(device = %self.info.name(), channel = self.channel, "Channel set");
    }

    pub fn screen_size(&self) -> u16 {
        self.screen_size
    }

    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    pub fn is_smart(&self) -> bool {
        self.smart
    }
}

impl Device for Television {
    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut DeviceInfo {
        &mut self.info
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Television
    }

    fn on_power_on(&mut self) {
        tracing::debug!(
            device = %self.info.name(),
            channel = self.channel,
            volume = self.volume,
            "Display on"
        );
    }

    fn details(&self) -> String {
        format!(
            "Size: {}\", Resolution: {}, Volume: {}, Channel: {}, Smart TV: {}",
            self.screen_size,
            self.resolution,
            self.volume,
            self.channel,
            if self.smart { "Yes" } else { "No" }
        )
    }

    fn settings(&self) -> Settings {
        Settings::Television {
            volume: self.volume,
            channel: self.channel,
        }
    }

    fn apply_settings(&mut self, settings: &Settings) -> bool {
        let Settings::Television { volume, channel } = *settings else {
            return false;
        };
        self.volume = volume.min(100);
        self.channel = channel.max(1);
        true
    }

    fn spawn(&self) -> Option<DeviceHandle> {
        Some(share(Television::new(self.brand)))
    }
}
