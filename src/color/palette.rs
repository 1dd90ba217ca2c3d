//! Fixed color palette shared by all effects
//!
//! Names follow the HTML color keywords the values were taken from.

use super::{Rgb, rgb_from_u32};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Colors to pick from, in the order the sparkle effect walks them
#[allow(clippy::unreadable_literal)]
pub const PALETTE: [Rgb; 18] = hex_palette![
    0xFF0000, // Red
    0xFA8072, // Salmon
    0xFF7F50, // Coral
    0xFFD700, // Gold
    0xFFFF00, // Yellow
    0x7CFC00, // Lawn green
    0x00FF00, // Lime
    0x00FF7F, // Spring green
    0x2E8B57, // Sea green
    0x00FFFF, // Cyan
    0x40E0D0, // Turquoise
    0x008080, // Teal
    0x00BFFF, // Deep sky blue
    0x0000FF, // Blue
    0xFF00FF, // Magenta
    0x900080, // Purple
    0x900080, // Purple (weights the pick towards it)
    0xFF69B4, // Hot pink
];

/// Map a random byte onto a palette entry
pub const fn palette_color(random: u8) -> Rgb {
    PALETTE[random as usize % PALETTE.len()]
}
