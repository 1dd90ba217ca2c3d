//! 8-bit integer helpers shared by the frame operators and effects

/// Scale an 8-bit value by `scale / 255`, truncating
///
/// Unlike a `>> 8` based scale this maps 255 to the identity, so the top of
/// the easing table reproduces the palette color exactly.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale255(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) / 255) as u8
}

/// Right shift that yields 0 instead of overflowing for shifts of 8 or more
#[inline]
pub const fn shr8(value: u8, shift: u8) -> u8 {
    if shift >= 8 { 0 } else { value >> shift }
}

/// Saturating subtraction, clamped at 0
#[inline]
pub const fn qsub8(value: u8, amount: u8) -> u8 {
    value.saturating_sub(amount)
}

/// Per-step delta for walking from `from` to `to` in `steps` steps
///
/// Integer division truncates toward zero, so the walk may stop short of `to`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn step_delta(from: u8, to: u8, steps: usize) -> i16 {
    if steps == 0 {
        return 0;
    }
    (to as i16 - from as i16) / steps as i16
}

/// Apply a signed delta to a channel, clamped to `0..=255`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn add_delta(value: u8, delta: i16) -> u8 {
    let sum = value as i16 + delta;
    if sum < 0 {
        0
    } else if sum > u8::MAX as i16 {
        u8::MAX
    } else {
        sum as u8
    }
}
