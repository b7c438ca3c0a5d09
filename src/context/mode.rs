//! Ambient modes and their device fan-out.

use crate::core::{SelectorError, Variant};
use crate::device::{Device, DeviceHandle, PowerReport};
use crate::variant_enum;

/// Color lights take in party mode.
pub const PARTY_COLOR: &str = "multicolor";

variant_enum! {
    /// Ambient mode of the home.
    #[derive(Default)]
    pub enum Mode: "mode" {
        #[default]
        Normal = 'N' => "Normal",
        Evening = 'E' => "Evening",
        Party = 'P' => "Party",
        Cinema = 'C' => "Cinema",
    }
}

/// Target power for each device family under a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeEffect {
    pub lights: bool,
    pub televisions: bool,
    pub sound_systems: bool,
    /// Lights turn multicolor and sound systems start playing.
    pub party: bool,
}

impl Mode {
    pub const fn effect(&self) -> ModeEffect {
        let (lights, televisions, sound_systems) = match self {
            Self::Normal => (true, false, false),
            Self::Evening => (false, false, false),
            Self::Party => (true, false, true),
            Self::Cinema => (false, true, false),
        };
        ModeEffect {
            lights,
            televisions,
            sound_systems,
            party: matches!(self, Self::Party),
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

/// Holds the active [`Mode`] and applies it to device collections.
///
/// Selecting a mode never touches devices; [`ModeContext::apply`] does.
///
/// # Example
///
/// ```rust
/// use hearth::context::{Mode, ModeContext};
/// use hearth::device::{share, Appearance, Brand, Device, Light};
///
/// let lights = vec![share(Light::new(Brand::Primary))];
/// let mut modes = ModeContext::new();
///
/// modes.set_mode('p').unwrap();
/// assert_eq!(modes.current(), Mode::Party);
///
/// let report = modes.apply(&lights, &[], &[]);
/// assert_eq!(report.switched, 1);
///
/// let mut light = lights[0].borrow_mut();
/// assert!(light.is_powered_on());
/// assert_eq!(light.appearance_mut().unwrap().color(), "multicolor");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ModeContext {
    current: Mode,
}

impl ModeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    pub fn current_mode_name(&self) -> &'static str {
        self.current.name()
    }

    /// Switch to the mode behind `selector`. An unknown selector leaves the
    /// active mode unchanged.
    pub fn set_mode(&mut self, selector: char) -> Result<Mode, SelectorError> {
        let mode = Mode::from_selector(selector).map_err(|err| {
            tracing::warn!(selector = %selector, "Invalid mode selection");
            err
        })?;
        self.select(mode);
        Ok(mode)
    }

    pub fn select(&mut self, mode: Mode) {
        self.current = mode;
        tracing::info!(mode = mode.name(), "Mode changed");
    }

    /// Drive every device to the active mode's pattern.
    ///
    /// Failed devices receive the command like any other.
    pub fn apply(
        &self,
        lights: &[DeviceHandle],
        televisions: &[DeviceHandle],
        sound_systems: &[DeviceHandle],
    ) -> PowerReport {
        let effect = self.current.effect();
        let mut report = PowerReport::default();

        for handle in lights {
            let mut light = handle.borrow_mut();
            report.record(light.set_power(effect.lights));
            if effect.party {
                if let Some(appearance) = light.appearance_mut() {
                    appearance.set_color(PARTY_COLOR);
                }
            }
        }
        for handle in televisions {
            report.record(handle.borrow_mut().set_power(effect.televisions));
        }
        for handle in sound_systems {
            let mut sound = handle.borrow_mut();
            report.record(sound.set_power(effect.sound_systems));
            if effect.party {
                if let Some(playback) = sound.playback_mut() {
                    playback.play_music();
                }
            }
        }

        tracing::info!(
            mode = self.current.name(),
            switched = report.switched,
            unchanged = report.unchanged,
            "Mode applied"
        );
        report
    }

    /// Display text for the active mode.
    pub fn describe(&self) -> String {
        let effect = self.current.effect();
        format!(
            "=== Mode: {} ===\n  Light: {}\n  TV: {}\n  Music: {}",
            self.current.name(),
            on_off(effect.lights),
            on_off(effect.televisions),
            on_off(effect.sound_systems)
        )
    }
}
