//! Sound systems.

use super::{share, Brand, Device, DeviceHandle, DeviceInfo, DeviceKind, Playback, Settings};

/// A soundbar that can play music from a source.
#[derive(Debug)]
pub struct SoundSystem {
    info: DeviceInfo,
    brand: Brand,
    volume: u8,
    muted: bool,
    source: String,
    playing: bool,
}

impl SoundSystem {
    /// Sonos Arc for [`Brand::Primary`], Bose 900 otherwise.
    pub fn new(brand: Brand) -> Self {
        let (maker, model, volume) = match brand {
            Brand::Primary => ("Sonos", "Arc Soundbar", 40),
            Brand::Secondary => ("Bose", "Smart Soundbar 900", 35),
        };
        Self {
            info: DeviceInfo::new(maker, model),
            brand,
            volume,
            muted: false,
            source: "Bluetooth".to_string(),
            playing: false,
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

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn mute(&mut self) {
        self.muted = true;
    }

    pub fn unmute(&mut self) {
        self.muted = false;
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        tracing::debug!(device = %self.info.name(), source = %self.source, "Source changed");
    }
}

impl Playback for SoundSystem {
    fn play_music(&mut self) -> bool {
        if !self.info.is_powered_on() {
            tracing::debug!(device = %self.info.name(), "Cannot play while powered off");
            return false;
        }
        self.playing = true;
        tracing::info!(device = %self.info.name(), source = %self.source, "Playing music");
        true
    }

    fn stop_music(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Device for SoundSystem {
    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut DeviceInfo {
        &mut self.info
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::SoundSystem
    }

    fn on_power_on(&mut self) {
        tracing::debug!(
            device = %self.info.name(),
            source = %self.source,
            volume = self.volume,
            "Ready"
        );
    }

    fn on_power_off(&mut self) {
        self.playing = false;
    }

    fn details(&self) -> String {
        format!(
            "Volume: {}%, Muted: {}, Source: {}, Playing: {}",
            self.volume,
            if self.muted { "Yes" } else { "No" },
            self.source,
            if self.playing { "Yes" } else { "No" }
        )
    }

    fn settings(&self) -> Settings {
        Settings::SoundSystem {
            volume: self.volume,
            source: self.source.clone(),
        }
    }

    fn apply_settings(&mut self, settings: &Settings) -> bool {
        let Settings::SoundSystem { volume, source } = settings else {
            return false;
        };
        self.volume = (*volume).min(100);
        self.source.clone_from(source);
        true
    }

    fn spawn(&self) -> Option<DeviceHandle> {
        Some(share(SoundSystem::new(self.brand)))
    }

    fn playback_mut(&mut self) -> Option<&mut dyn Playback> {
        Some(self)
    }
}
