//! Gradient effect
//!
//! The whole strip shows one color that walks through the hue circle.

use super::Effect;
use crate::color::{Rgb, fill, hsv};

/// Hue increment per animation step (64 steps per revolution)
pub const GRADIENT_HUE_STEP: u8 = (256 / 64) as u8;

#[derive(Debug, Clone, Default)]
pub struct GradientEffect {
    hue: u8,
}

impl GradientEffect {
    /// Hue painted on the next step
    pub const fn hue(&self) -> u8 {
        self.hue
    }
}

impl Effect for GradientEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> bool {
        fill(leds, hsv(self.hue, 255, 255));
        self.hue = self.hue.wrapping_add(GRADIENT_HUE_STEP);
        true
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
