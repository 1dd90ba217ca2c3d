use crate::{
    color::Rgb,
    math8::{scale255, shr8},
};

/// Dim a color by right-shifting every channel
///
/// Low bits are discarded, so dimming is not reversible.
#[inline]
pub const fn dim(color: Rgb, shift: u8) -> Rgb {
    Rgb {
        r: shr8(color.r, shift),
        g: shr8(color.g, shift),
        b: shr8(color.b, shift),
    }
}

/// Scale every channel by `brightness / 255`
#[inline]
pub const fn scale_color(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale255(color.r, brightness),
        g: scale255(color.g, brightness),
        b: scale255(color.b, brightness),
    }
}

/// Add a per-channel offset to a color, then dim it by `shift`
///
/// The sum is computed in 16 bits, so a channel near 255 plus its offset does
/// not wrap before the shift brings it back into range.
#[allow(clippy::cast_possible_truncation)]
pub const fn offset_dim(color: Rgb, offset: Rgb, shift: u8) -> Rgb {
    const fn channel(value: u8, offset: u8, shift: u8) -> u8 {
        let sum = value as u16 + offset as u16;
        let shifted = if shift >= 16 { 0 } else { sum >> shift };
        if shifted > u8::MAX as u16 {
            u8::MAX
        } else {
            shifted as u8
        }
    }

    Rgb {
        r: channel(color.r, offset.r, shift),
        g: channel(color.g, offset.g, shift),
        b: channel(color.b, offset.b, shift),
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
