//! Chase effect
//!
//! Every LED shows the next of 16 hues, and the pattern travels along the
//! strip in the selected direction.

use super::Effect;
use crate::color::{Rgb, hsv};

/// Hue distance between neighbour LEDs and per animation step
pub const CHASE_HUE_STEP: u8 = (256 / 16) as u8;

/// Travel direction of the chase pattern
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChaseDirection {
    /// Base hue increases every step (the "left" key)
    #[default]
    Forward,
    /// Base hue decreases every step (the "right" key)
    Reverse,
}

#[derive(Debug, Clone, Default)]
pub struct ChaseEffect {
    hue: u8,
    direction: ChaseDirection,
}

impl ChaseEffect {
    /// Hue of the first LED on the next step
    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub const fn direction(&self) -> ChaseDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: ChaseDirection) {
        self.direction = direction;
    }

    /// Hue of LED `index` for a pattern based at `base_hue`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hue_at(base_hue: u8, index: usize) -> u8 {
        base_hue.wrapping_add((index as u8).wrapping_mul(CHASE_HUE_STEP))
    }
}

impl Effect for ChaseEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> bool {
        for (index, led) in leds.iter_mut().enumerate() {
            *led = hsv(Self::hue_at(self.hue, index), 255, 255);
        }

        self.hue = match self.direction {
            ChaseDirection::Forward => self.hue.wrapping_add(CHASE_HUE_STEP),
            ChaseDirection::Reverse => self.hue.wrapping_sub(CHASE_HUE_STEP),
        };
        true
    }

    /// Rewinds the hue; the direction is a user setting and survives
    fn reset(&mut self) {
        self.hue = 0;
    }
}
