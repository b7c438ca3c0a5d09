//! Optional device capabilities.

/// Color and brightness control.
pub trait Appearance {
    fn color(&self) -> &str;

    fn set_color(&mut self, color: &str);

    fn brightness(&self) -> u8;

    /// Clamped to `0..=100`.
    fn set_brightness(&mut self, level: u8);
}

/// Music playback.
pub trait Playback {
    /// Start playing. Returns `false` when the device is powered off and
    /// nothing started.
    fn play_music(&mut self) -> bool;

    fn stop_music(&mut self);

    fn is_playing(&self) -> bool;
}
