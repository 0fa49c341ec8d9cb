//! Effect system with compile-time known effect variants
//!
//! The five light modes are a closed set. Each effect implements the
//! [`Effect`] trait and [`EffectState`] dispatches to the selected one by
//! matching on [`LightMode`], so no effect is ever boxed.

mod chase;
mod constant;
mod gradient;
mod sparkle;
mod sprites;

pub use chase::{CHASE_HUE_STEP, ChaseDirection, ChaseEffect};
pub use constant::ConstantEffect;
pub use gradient::{GRADIENT_HUE_STEP, GradientEffect};
pub use sparkle::{
    SPARKLE_BANDS, SPARKLE_LIGHTNESS_FLOOR, SPARKLE_LIGHTNESS_STEP, SparkleEffect, SparklePhase,
};
pub use sprites::SpriteEffect;

use crate::{
    color::Rgb,
    config::{ControllerConfig, SpeedConfig},
};

pub trait Effect {
    /// Sets if the effect changes over time
    ///
    /// Only animated effects can be paused and resumed.
    const ANIMATED: bool = true;

    /// Paint one animation step
    ///
    /// Returns `true` if the strip content changed.
    fn render(&mut self, leds: &mut [Rgb]) -> bool;

    /// Reset the animation state
    fn reset(&mut self) {}
}

/// Light modes in the order the mode key cycles through them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightMode {
    Constant,
    Gradient,
    Chase,
    Sprite,
    Sparkle,
}

impl LightMode {
    /// Mode selected by the next press of the mode key
    pub const fn next(self) -> Self {
        match self {
            Self::Constant => Self::Gradient,
            Self::Gradient => Self::Chase,
            Self::Chase => Self::Sprite,
            Self::Sprite => Self::Sparkle,
            Self::Sparkle => Self::Constant,
        }
    }

    /// Returns if the mode animates and accepts play/pause
    ///
    /// Derived from each effect's `Effect::ANIMATED` constant.
    pub const fn is_animated(self) -> bool {
        match self {
            Self::Constant => ConstantEffect::ANIMATED,
            Self::Gradient => GradientEffect::ANIMATED,
            Self::Chase => ChaseEffect::ANIMATED,
            Self::Sprite => SpriteEffect::ANIMATED,
            Self::Sparkle => SparkleEffect::ANIMATED,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Gradient => "gradient",
            Self::Chase => "chase",
            Self::Sprite => "sprite",
            Self::Sparkle => "sparkle",
        }
    }
}

/// Mode selection, animation timing and the state of every effect
///
/// All effects stay alive while another mode is selected, so user settings
/// such as the constant color or the chase direction survive mode changes.
#[derive(Debug, Clone)]
pub struct EffectState {
    pub(crate) mode: LightMode,
    /// Ticks an animation step is held
    pub(crate) cycles_to_hold: u8,
    /// Position within the current animation step
    pub(crate) cycle_counter: u8,
    pub(crate) paused: bool,

    pub(crate) constant: ConstantEffect,
    pub(crate) gradient: GradientEffect,
    pub(crate) chase: ChaseEffect,
    pub(crate) sprite: SpriteEffect,
    pub(crate) sparkle: SparkleEffect,
}

impl EffectState {
    pub fn new(config: &ControllerConfig) -> Self {
        let cycles_to_hold = config
            .speed
            .preset(config.mode)
            .unwrap_or(config.speed.sparkle)
            .max(1);
        Self {
            mode: config.mode,
            cycles_to_hold,
            cycle_counter: 0,
            paused: false,
            constant: ConstantEffect::default(),
            gradient: GradientEffect::default(),
            chase: ChaseEffect::default(),
            sprite: SpriteEffect::new(&config.sprite, config.seed),
            sparkle: SparkleEffect::default(),
        }
    }

    pub const fn mode(&self) -> LightMode {
        self.mode
    }

    pub const fn cycles_to_hold(&self) -> u8 {
        self.cycles_to_hold
    }

    pub const fn cycle_counter(&self) -> u8 {
        self.cycle_counter
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub const fn constant(&self) -> &ConstantEffect {
        &self.constant
    }

    pub const fn gradient(&self) -> &GradientEffect {
        &self.gradient
    }

    pub const fn chase(&self) -> &ChaseEffect {
        &self.chase
    }

    pub const fn sprite(&self) -> &SpriteEffect {
        &self.sprite
    }

    pub const fn sparkle(&self) -> &SparkleEffect {
        &self.sparkle
    }

    /// Run the selected effect for one tick
    ///
    /// Animated effects paint on the first tick of every animation step
    /// unless paused. The constant effect paints whenever a `refresh` is
    /// pending. Returns `true` if the strip content changed.
    pub fn tick(&mut self, leds: &mut [Rgb], refresh: bool) -> bool {
        let changed = match self.mode {
            LightMode::Constant => refresh && self.constant.render(leds),
            _ if self.cycle_counter == 0 && !self.paused => self.render_active(leds),
            _ => false,
        };

        self.cycle_counter = (self.cycle_counter + 1) % self.cycles_to_hold.max(1);
        changed
    }

    /// Select `mode` and start it from scratch
    pub fn switch_mode(&mut self, mode: LightMode, speed: &SpeedConfig) {
        self.mode = mode;
        self.cycle_counter = 0;
        if let Some(preset) = speed.preset(mode) {
            self.cycles_to_hold = preset.max(1);
        }
        self.reset_active();
    }

    /// Restart the animation after a power transition
    ///
    /// Rewinds the step timing, the hue of the color wheel effects and the
    /// sparkle ramp, and resumes playback.
    pub fn restart(&mut self) {
        self.cycle_counter = 0;
        self.paused = false;
        Effect::reset(&mut self.gradient);
        Effect::reset(&mut self.chase);
        Effect::reset(&mut self.sparkle);
    }

    /// Set the number of ticks an animation step is held
    pub(crate) fn set_cycles_to_hold(&mut self, cycles: u8) {
        self.cycles_to_hold = cycles.max(1);
        self.cycle_counter %= self.cycles_to_hold;
    }

    fn render_active(&mut self, leds: &mut [Rgb]) -> bool {
        match self.mode {
            LightMode::Constant => self.constant.render(leds),
            LightMode::Gradient => self.gradient.render(leds),
            LightMode::Chase => self.chase.render(leds),
            LightMode::Sprite => self.sprite.render(leds),
            LightMode::Sparkle => self.sparkle.render(leds),
        }
    }

    fn reset_active(&mut self) {
        match self.mode {
            LightMode::Constant => Effect::reset(&mut self.constant),
            LightMode::Gradient => Effect::reset(&mut self.gradient),
            LightMode::Chase => Effect::reset(&mut self.chase),
            LightMode::Sprite => Effect::reset(&mut self.sprite),
            LightMode::Sparkle => Effect::reset(&mut self.sparkle),
        }
    }
}
