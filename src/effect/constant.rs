//! Constant color fill effect
//!
//! Fills all LEDs with a single solid color. The strip only needs repainting
//! when something changed, so the engine drives this effect on refresh only.

use super::Effect;
use crate::color::{PaletteColor, Rgb, fill};

/// Constant color effect - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct ConstantEffect {
    color: Rgb,
}

impl Default for ConstantEffect {
    fn default() -> Self {
        Self::new(PaletteColor::White.rgb())
    }
}

impl ConstantEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

impl Effect for ConstantEffect {
    const ANIMATED: bool = false;

    fn render(&mut self, leds: &mut [Rgb]) -> bool {
        fill(leds, self.color);
        true
    }
}
