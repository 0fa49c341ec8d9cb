//! Device power state machine
//!
//! The power key cycles Off → On → Eco → Off. On and Eco differ only in
//! brightness. Switching off fades the strip out and blocks while doing so.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb, fill};
use crate::config::BrightnessConfig;
use crate::effect::EffectState;
use crate::{BlockingDelay, LedSink};

/// Power state of the device
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerMode {
    #[default]
    Off,
    On,
    Eco,
}

impl PowerMode {
    /// State reached by the next power toggle
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Eco,
            Self::Eco => Self::Off,
        }
    }

    /// Returns if the strip is lit in this state
    pub const fn is_lit(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Color of the on-board status LED
    pub const fn status_color(self) -> Rgb {
        match self {
            Self::Off => Rgb { r: 255, g: 0, b: 0 },
            Self::On | Self::Eco => Rgb { r: 0, g: 255, b: 0 },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
            Self::Eco => "eco",
        }
    }
}

/// Power, brightness and pending output of the device
#[derive(Debug, Clone)]
pub struct DeviceState {
    pub(crate) power: PowerMode,
    pub(crate) brightness: u8,
    /// The strip changed since the last commit
    pub(crate) dirty: bool,
}

impl DeviceState {
    pub const fn new(brightness: &BrightnessConfig) -> Self {
        Self {
            power: PowerMode::Off,
            brightness: brightness.standby,
            dirty: false,
        }
    }

    pub const fn power(&self) -> PowerMode {
        self.power
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Advance the power state machine by one toggle
///
/// Entering On or Eco applies the brightness preset and restarts the
/// selected effect. Leaving Eco fades the strip to black before returning,
/// so the call blocks for `brightness * fade_step`.
pub(crate) fn toggle_power<S: LedSink, D: BlockingDelay>(
    device: &mut DeviceState,
    effects: &mut EffectState,
    leds: &mut [Rgb],
    config: &BrightnessConfig,
    fade_step: Duration,
    sink: &mut S,
    delay: &mut D,
) {
    let next = device.power.next();
    #[cfg(feature = "esp32-log")]
    println!("[device] switching to {}", next.as_str());

    match next {
        PowerMode::On | PowerMode::Eco => {
            device.brightness = if next == PowerMode::On {
                config.on
            } else {
                config.eco
            };
            fill(leds, BLACK);
            effects.restart();
            device.mark_dirty();
        }
        PowerMode::Off => {
            fade_out(device.brightness, leds, fade_step, sink, delay);
            fill(leds, BLACK);
            device.brightness = config.standby;
            sink.set_brightness(device.brightness);
            sink.write(leds);
            device.dirty = false;
        }
    }
    device.power = next;
}

/// Fade the committed strip from `brightness` down to zero, one unit per step
pub(crate) fn fade_out<S: LedSink, D: BlockingDelay>(
    brightness: u8,
    leds: &[Rgb],
    step_delay: Duration,
    sink: &mut S,
    delay: &mut D,
) {
    for level in (0..=brightness).rev() {
        sink.set_brightness(level);
        sink.write(leds);
        delay.delay(step_delay);
    }
}
