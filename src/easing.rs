//! Quarter sine brightness curve
//!
//! The values are `sin(x)^2` sampled over a quarter period and scaled to
//! 0..=255, so a linear walk through the table looks like a linear change in
//! perceived brightness.

/// Number of steps in one ramp
pub const EASING_STEPS: usize = 64;

/// Brightness multipliers, monotonically non-decreasing
pub const EASING_LUT: [u8; EASING_STEPS] = [
    0, 0, 1, 1, 2, 4, 6, 8, 10, 13, 16, //
    19, 22, 26, 30, 34, 38, 43, 48, 53, 58, 64, //
    69, 75, 81, 87, 93, 99, 105, 112, 117, 124, 131, //
    137, 143, 149, 155, 162, 168, 175, 180, 186, 192, 197, //
    202, 207, 211, 217, 220, 226, 230, 233, 235, 239, 243, //
    245, 247, 249, 251, 253, 253, 255, 255, 255,
];

/// Brightness at `step` of a rising ramp
///
/// Steps past the end of the table stay at full brightness.
#[inline]
pub const fn ease_in(step: usize) -> u8 {
    if step >= EASING_STEPS {
        return EASING_LUT[EASING_STEPS - 1];
    }
    EASING_LUT[step]
}

/// Brightness at `step` of a falling ramp, the rising ramp read backwards
#[inline]
pub const fn ease_out(step: usize) -> u8 {
    if step >= EASING_STEPS {
        return EASING_LUT[0];
    }
    EASING_LUT[EASING_STEPS - 1 - step]
}
