//! Fixed colors selectable from the remote in constant mode

use super::{Rgb, rgb_from_u32};

/// Colors bound to the colored keys of the remote
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteColor {
    Red,
    Green,
    Yellow,
    Blue,
    White,
}

impl PaletteColor {
    /// All palette entries in key order
    pub const ALL: [Self; 5] = [Self::Red, Self::Green, Self::Yellow, Self::Blue, Self::White];

    #[allow(clippy::unreadable_literal)]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => rgb_from_u32(0xFF0000),
            Self::Green => rgb_from_u32(0x00FF00),
            Self::Yellow => rgb_from_u32(0xFFFF00),
            Self::Blue => rgb_from_u32(0x0000FF),
            Self::White => rgb_from_u32(0xFFFFFF),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::White => "white",
        }
    }
}
