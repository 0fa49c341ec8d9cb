//! Sprite effect
//!
//! Sprites randomly appear in the middle of the strip, run towards one end
//! and fade out on the way.

use super::Effect;
use crate::{
    color::Rgb,
    config::SpriteConfig,
    sprite::{Sprite, SpritePool},
};

/// Step number passed to the pool; runtime sprites are never scheduled
const RUNTIME_STEP: u8 = 0;

#[derive(Debug, Clone)]
pub struct SpriteEffect {
    pool: SpritePool,
    rng: fastrand::Rng,
    spawn_rate: u8,
    fade_factor: u8,
}

impl SpriteEffect {
    pub fn new(config: &SpriteConfig, seed: u64) -> Self {
        Self {
            pool: SpritePool::new(),
            rng: fastrand::Rng::with_seed(seed),
            spawn_rate: config.spawn_rate,
            fade_factor: config.fade_factor,
        }
    }

    pub fn pool(&self) -> &SpritePool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut SpritePool {
        &mut self.pool
    }

    pub const fn fade_factor(&self) -> u8 {
        self.fade_factor
    }
}

impl Effect for SpriteEffect {
    fn render(&mut self, leds: &mut [Rgb]) -> bool {
        if self.rng.u8(0..100) < self.spawn_rate {
            let sprite = Sprite::spawn_random(&mut self.rng, leds.len());
            // A full pool drops the new sprite
            let _ = self.pool.insert(sprite);
        }

        self.pool.advance_all(leds, RUNTIME_STEP, self.fade_factor);
        true
    }
}
