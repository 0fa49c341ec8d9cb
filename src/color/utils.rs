use crate::color::{Hsv, Rgb, hsv2rgb};

/// Convert an HSV triple to RGB.
///
/// Hue is on a 0-255 circle and wraps naturally with `u8` arithmetic.
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Scale every channel by `factor / 255`, rounding down.
///
/// A factor of 255 keeps the color, 0 turns it black.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fade_toward_black(color: Rgb, factor: u8) -> Rgb {
    const fn channel(value: u8, factor: u8) -> u8 {
        ((value as u16 * factor as u16) / 255) as u8
    }

    Rgb {
        r: channel(color.r, factor),
        g: channel(color.g, factor),
        b: channel(color.b, factor),
    }
}

/// Paint every LED with the same color
pub fn fill(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
