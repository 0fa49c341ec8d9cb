//! Controller configuration
//!
//! Every tunable of the controller lives here. [`ControllerConfig::default`]
//! matches the reference board: a 29 LED strip behind an IR remote.

use embassy_time::Duration;

use crate::effect::LightMode;

/// Number of LEDs on the reference strip
pub const DEFAULT_STRIP_LEN: usize = 29;

/// Brightness presets and adjustment range
#[derive(Debug, Clone, Copy)]
pub struct BrightnessConfig {
    /// Applied while the device is off
    pub standby: u8,
    /// Applied when switching to on
    pub on: u8,
    /// Applied when switching to eco
    pub eco: u8,
    /// Lowest brightness reachable from the remote
    pub min: u8,
    /// Highest brightness reachable from the remote (limits current draw)
    pub max: u8,
    /// Increment per brightness key press
    pub step: u8,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            standby: 8,
            on: 20,
            eco: 10,
            min: 2,
            max: 50,
            step: 2,
        }
    }
}

/// Speed range and per-mode speed presets
///
/// Speed is expressed as the number of ticks an animation step is held, so
/// smaller values are faster.
#[derive(Debug, Clone, Copy)]
pub struct SpeedConfig {
    /// Fastest speed
    pub min: u8,
    /// Slowest speed
    pub max: u8,
    /// Increment per speed key press
    pub step: u8,
    pub gradient: u8,
    pub chase: u8,
    pub sprite: u8,
    pub sparkle: u8,
}

impl SpeedConfig {
    /// Speed preset applied when entering `mode`
    ///
    /// Constant mode has no animation and keeps the current speed.
    pub const fn preset(&self, mode: LightMode) -> Option<u8> {
        match mode {
            LightMode::Constant => None,
            LightMode::Gradient => Some(self.gradient),
            LightMode::Chase => Some(self.chase),
            LightMode::Sprite => Some(self.sprite),
            LightMode::Sparkle => Some(self.sparkle),
        }
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            min: 2,
            max: 40,
            step: 2,
            gradient: 4,
            chase: 20,
            sprite: 2,
            sparkle: 2,
        }
    }
}

/// Sprite effect tuning
#[derive(Debug, Clone, Copy)]
pub struct SpriteConfig {
    /// Probability in percent that a sprite is spawned on an animation step
    pub spawn_rate: u8,
    /// Per step fade factor (0-255 = 0.0-1.0)
    pub fade_factor: u8,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            spawn_rate: 30,
            fade_factor: 230,
        }
    }
}

/// Timing of the tick loop and of the blocking animations
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    /// Period of the tick loop
    pub tick: Duration,
    /// Delay after every brightness step of a fade-out
    pub fade_step: Duration,
    /// Delay after every step of the startup animation
    pub startup_step: Duration,
    /// Number of steps of the startup animation
    pub startup_steps: u8,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            fade_step: Duration::from_millis(50),
            startup_step: Duration::from_millis(100),
            startup_steps: 30,
        }
    }
}

/// Configuration for the light controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Light mode selected at boot
    pub mode: LightMode,
    pub brightness: BrightnessConfig,
    pub speed: SpeedConfig,
    pub sprite: SpriteConfig,
    pub timings: Timings,
    /// Seed of the sprite spawner PRNG
    pub seed: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mode: LightMode::Sparkle,
            brightness: BrightnessConfig::default(),
            speed: SpeedConfig::default(),
            sprite: SpriteConfig::default(),
            timings: Timings::default(),
            seed: 0x5EED,
        }
    }
}
