mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use palette::PaletteColor;
pub use utils::{fade_toward_black, fill, hsv, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
pub use smart_leds::hsv::hsv2rgb;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
