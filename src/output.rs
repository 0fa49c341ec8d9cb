//! Output adapters
//!
//! [`ScaledOutput`] applies the brightness scalar in software for drivers
//! without a brightness register. [`EmbassyDelay`] provides the blocking
//! delay on top of the `embassy-time` driver.

use embassy_time::{Duration, block_for};

use crate::color::{BLACK, Rgb};
use crate::math8::scale8;
use crate::{BlockingDelay, LedSink, OutputDriver};

/// Brightness scaling in front of a raw driver
///
/// N must be at least the strip length. Debug builds assert it; release
/// builds drop the LEDs past N.
pub struct ScaledOutput<D: OutputDriver, const N: usize> {
    driver: D,
    brightness: u8,
    frame: [Rgb; N],
}

impl<D: OutputDriver, const N: usize> ScaledOutput<D, N> {
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            brightness: u8::MAX,
            frame: [BLACK; N],
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D: OutputDriver, const N: usize> LedSink for ScaledOutput<D, N> {
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn write(&mut self, colors: &[Rgb]) {
        debug_assert!(colors.len() <= N, "frame longer than the output buffer");
        let len = colors.len().min(N);
        let frame = &mut self.frame[..len];

        for (pixel, color) in frame.iter_mut().zip(colors) {
            *pixel = match self.brightness {
                u8::MAX => *color,
                0 => BLACK,
                level => Rgb {
                    r: scale8(color.r, level),
                    g: scale8(color.g, level),
                    b: scale8(color.b, level),
                },
            };
        }
        self.driver.write(frame);
    }
}

/// Busy-wait delay backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyDelay;

impl BlockingDelay for EmbassyDelay {
    fn delay(&mut self, duration: Duration) {
        block_for(duration);
    }
}
