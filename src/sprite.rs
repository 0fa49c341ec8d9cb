//! Sprite simulation
//!
//! Sprites are colored points moving along the strip one LED per animation
//! step while fading out. They live in a fixed-size pool: a new sprite takes
//! the first inactive slot and is dropped when every slot is busy.

use crate::color::{BLACK, Rgb, fade_toward_black, fill, hsv};

/// Number of sprite slots
pub const SPRITE_POOL_SIZE: usize = 10;

/// `activate_at` value of a sprite that is not scheduled
pub const NOT_SCHEDULED: i8 = -1;

/// A colored point moving along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Only active sprites are drawn and moved
    pub active: bool,
    /// Step at which an inactive sprite becomes active
    pub activate_at: i8,
    /// LED index, may leave the strip right before deactivation
    pub position: i8,
    /// LEDs moved per step
    pub velocity: i8,
    pub color: Rgb,
}

impl Default for Sprite {
    fn default() -> Self {
        Self::IDLE
    }
}

impl Sprite {
    /// Content of an unused pool slot
    pub const IDLE: Self = Self {
        active: false,
        activate_at: NOT_SCHEDULED,
        position: 0,
        velocity: 0,
        color: Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
    };

    /// Create an active sprite in the middle of the strip
    ///
    /// Moves left or right with equal probability and gets a random hue with
    /// saturation and value drawn from the upper half of their range.
    /// `strip_len` must fit the `i8` position range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn spawn_random(rng: &mut fastrand::Rng, strip_len: usize) -> Self {
        let velocity = if rng.bool() { 1 } else { -1 };
        let color = hsv(rng.u8(..), rng.u8(128..), rng.u8(128..));
        Self {
            active: true,
            activate_at: NOT_SCHEDULED,
            position: (strip_len / 2) as i8,
            velocity,
            color,
        }
    }

    /// Create an inactive sprite released at `step`
    pub const fn scheduled(step: i8, position: i8, velocity: i8, color: Rgb) -> Self {
        Self {
            active: false,
            activate_at: step,
            position,
            velocity,
            color,
        }
    }

    /// LED index of the sprite if it lies on a strip of `strip_len` LEDs
    fn led_index(&self, strip_len: usize) -> Option<usize> {
        usize::try_from(self.position)
            .ok()
            .filter(|&index| index < strip_len)
    }
}

/// Fixed-capacity sprite arena
#[derive(Debug, Clone)]
pub struct SpritePool {
    slots: [Sprite; SPRITE_POOL_SIZE],
}

impl Default for SpritePool {
    fn default() -> Self {
        Self::new()
    }
}

impl SpritePool {
    pub const fn new() -> Self {
        Self {
            slots: [Sprite::IDLE; SPRITE_POOL_SIZE],
        }
    }

    /// Get the sprite slots in pool order
    pub fn slots(&self) -> &[Sprite; SPRITE_POOL_SIZE] {
        &self.slots
    }

    /// Number of active sprites
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|sprite| sprite.active).count()
    }

    /// Put a sprite into the first inactive slot
    ///
    /// Returns the slot index, or the sprite back if the pool is full.
    pub fn insert(&mut self, sprite: Sprite) -> Result<usize, Sprite> {
        let Some(index) = self.slots.iter().position(|slot| !slot.active) else {
            return Err(sprite);
        };
        self.slots[index] = sprite;
        Ok(index)
    }

    /// Draw all active sprites and move them one step
    ///
    /// The strip is cleared first. Slots are processed in pool order, so a
    /// later slot overwrites an earlier one sharing the same LED. Sprites
    /// scheduled for `step` are activated before drawing.
    pub fn advance_all(&mut self, leds: &mut [Rgb], step: u8, fade_factor: u8) {
        fill(leds, BLACK);

        for sprite in &mut self.slots {
            if i16::from(sprite.activate_at) == i16::from(step) {
                sprite.active = true;
            }
            if !sprite.active {
                continue;
            }

            if let Some(index) = sprite.led_index(leds.len()) {
                leds[index] = sprite.color;
            }

            sprite.position = sprite.position.wrapping_add(sprite.velocity);
            sprite.color = fade_toward_black(sprite.color, fade_factor);

            if sprite.led_index(leds.len()).is_none() {
                sprite.active = false;
            }
        }
    }

    /// Deactivate and unschedule every sprite
    pub fn clear_all(&mut self) {
        for sprite in &mut self.slots {
            sprite.active = false;
            sprite.activate_at = NOT_SCHEDULED;
        }
    }

    /// Load the boot choreography
    ///
    /// A yellow core sits in the middle from step 0; blue, red and green
    /// pairs leave it in both directions at steps 5, 10 and 15.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn schedule_startup(&mut self, strip_len: usize) {
        let center = (strip_len / 2) as i8;
        let pairs = [
            (5, Rgb::new(32, 32, 128)),
            (10, Rgb::new(128, 0, 0)),
            (15, Rgb::new(0, 128, 0)),
        ];

        self.clear_all();
        self.slots[0] = Sprite {
            active: true,
            ..Sprite::scheduled(0, center, 0, Rgb::new(255, 255, 0))
        };
        for (pair, (step, color)) in pairs.into_iter().enumerate() {
            let slot = 1 + pair * 2;
            self.slots[slot] = Sprite::scheduled(step, center - 1, -1, color);
            self.slots[slot + 1] = Sprite::scheduled(step, center + 1, 1, color);
        }
    }
}
