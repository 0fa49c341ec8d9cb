#![no_std]

pub mod channel;
pub mod color;
pub mod config;
pub mod device;
pub mod effect;
pub mod engine;
pub mod input;
pub mod interpreter;
pub mod math8;
pub mod output;
pub mod scheduler;
pub mod sprite;

pub use config::{BrightnessConfig, ControllerConfig, SpeedConfig, SpriteConfig, Timings};
pub use device::{DeviceState, PowerMode};
pub use effect::{ChaseDirection, EffectState, LightMode};
pub use engine::{Engine, TickOutcome};
pub use input::{
    Command, InputChannel, InputEvent, InputReceiver, InputSender, RemoteDecoder, RemoteEvent,
};
pub use output::{EmbassyDelay, ScaledOutput};
pub use scheduler::{TickResult, TickScheduler};
pub use sprite::{Sprite, SpritePool};

pub use color::{Hsv, PaletteColor, Rgb};
pub use embassy_time::{Duration, Instant};

/// Raw LED driver trait
///
/// Implement this trait for drivers that take final colors and have no
/// brightness control of their own. Wrap them in [`ScaledOutput`] to get a
/// [`LedSink`].
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// LED strip as seen by the controller
///
/// The controller sets a global brightness scalar and commits whole frames.
pub trait LedSink {
    /// Set the brightness applied to the following commits
    fn set_brightness(&mut self, brightness: u8);

    /// Commit colors to the strip, blocking until they are latched
    fn write(&mut self, colors: &[Rgb]);
}

/// Blocking delay used by the power-down fade and the startup animation
pub trait BlockingDelay {
    fn delay(&mut self, duration: Duration);
}
