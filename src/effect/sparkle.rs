//! Sparkle effect
//!
//! Every fourth LED breathes in one of four colors. After each breath the
//! lit group moves one LED further and switches to the next color.

use super::Effect;
use crate::color::{BLACK, Rgb, hsv};

/// Lightness change per animation step
pub const SPARKLE_LIGHTNESS_STEP: u8 = 5;
/// Lightness at the start of a breath
pub const SPARKLE_LIGHTNESS_FLOOR: u8 = 50;
/// Number of color bands
pub const SPARKLE_BANDS: u8 = 4;

// Blue, green, red, white
const BAND_HUE: [u8; SPARKLE_BANDS as usize] = [160, 96, 0, 0];
const BAND_SAT: [u8; SPARKLE_BANDS as usize] = [255, 255, 255, 0];

/// Phase of the breathing ramp
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparklePhase {
    Rising,
    Falling,
    /// One dark step before the next band lights up
    Resetting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparkleEffect {
    color_index: u8,
    lightness: u8,
    phase: SparklePhase,
}

impl Default for SparkleEffect {
    fn default() -> Self {
        Self {
            color_index: 0,
            lightness: SPARKLE_LIGHTNESS_FLOOR,
            phase: SparklePhase::Rising,
        }
    }
}

impl SparkleEffect {
    /// Index of the lit band
    pub const fn color_index(&self) -> u8 {
        self.color_index
    }

    pub const fn lightness(&self) -> u8 {
        self.lightness
    }

    pub const fn phase(&self) -> SparklePhase {
        self.phase
    }

    /// Color of band `index` at `lightness`
    pub fn band_color(index: u8, lightness: u8) -> Rgb {
        let band = usize::from(index % SPARKLE_BANDS);
        hsv(BAND_HUE[band], BAND_SAT[band], lightness)
    }

    fn advance_ramp(&mut self) {
        match self.phase {
            SparklePhase::Rising => {
                if self.lightness < u8::MAX - SPARKLE_LIGHTNESS_STEP {
                    self.lightness += SPARKLE_LIGHTNESS_STEP;
                } else {
                    self.lightness = u8::MAX;
                    self.phase = SparklePhase::Falling;
                }
            }
            SparklePhase::Falling => {
                if self.lightness >= SPARKLE_LIGHTNESS_FLOOR + SPARKLE_LIGHTNESS_STEP {
                    self.lightness -= SPARKLE_LIGHTNESS_STEP;
                } else {
                    self.lightness = 0;
                    self.phase = SparklePhase::Resetting;
                }
            }
            SparklePhase::Resetting => {
                self.lightness = SPARKLE_LIGHTNESS_FLOOR;
                self.color_index = (self.color_index + 1) % SPARKLE_BANDS;
                self.phase = SparklePhase::Rising;
            }
        }
    }
}

impl Effect for SparkleEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> bool {
        self.advance_ramp();

        let lit = Self::band_color(self.color_index, self.lightness);
        for (index, led) in leds.iter_mut().enumerate() {
            *led = if index % usize::from(SPARKLE_BANDS) == usize::from(self.color_index) {
                lit
            } else {
                BLACK
            };
        }
        true
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
