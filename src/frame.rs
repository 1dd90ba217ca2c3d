//! Frame buffer and the operators effects use to mutate it

use core::ops::Index;

use crate::{
    color::{Rgb, dim},
    layout::{EYE_PIXELS, PIXEL_COUNT},
    math8::qsub8,
};

/// Bytes transmitted per pixel
pub const BYTES_PER_PIXEL: usize = 3;

/// Set every pixel to `color >> shift`
pub fn fill(leds: &mut [Rgb], color: Rgb, shift: u8) {
    let dimmed = dim(color, shift);
    for led in leds {
        *led = dimmed;
    }
}

/// Subtract `amount` from every channel, clamping at zero
pub fn decay(leds: &mut [Rgb], amount: u8) {
    for led in leds {
        led.r = qsub8(led.r, amount);
        led.g = qsub8(led.g, amount);
        led.b = qsub8(led.b, amount);
    }
}

/// Set a single pixel to `color >> shift`
///
/// Out of range indices are ignored.
pub fn set_pixel(leds: &mut [Rgb], index: usize, color: Rgb, shift: u8) {
    debug_assert!(index < leds.len(), "pixel index out of range");
    if let Some(led) = leds.get_mut(index) {
        *led = dim(color, shift);
    }
}

/// Serialize pixels in WS2812 wire order (green, red, blue)
///
/// Returns the number of bytes written. Stops at whichever runs out first.
pub fn encode_grb(leds: &[Rgb], bytes: &mut [u8]) -> usize {
    let mut written = 0;
    for (chunk, led) in bytes.chunks_exact_mut(BYTES_PER_PIXEL).zip(leds) {
        chunk.copy_from_slice(&[led.g, led.r, led.b]);
        written += BYTES_PER_PIXEL;
    }
    written
}

/// Which part of the buffer gets transmitted for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputScope {
    /// Every pixel as stored
    #[default]
    Full,
    /// First eye's pixels, sent to both segments
    FirstHalfTwice,
}

/// Current state of every LED on the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [Rgb; PIXEL_COUNT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a dark frame
    pub const fn new() -> Self {
        Self {
            pixels: [Rgb { r: 0, g: 0, b: 0 }; PIXEL_COUNT],
        }
    }

    pub const fn len(&self) -> usize {
        PIXEL_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        PIXEL_COUNT == 0
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Split into the first and second eye
    pub fn eyes_mut(&mut self) -> (&mut [Rgb], &mut [Rgb]) {
        self.pixels.split_at_mut(EYE_PIXELS)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        fill(&mut self.pixels, Rgb::default(), 0);
    }

    pub fn fill(&mut self, color: Rgb, shift: u8) {
        fill(&mut self.pixels, color, shift);
    }

    pub fn decay(&mut self, amount: u8) {
        decay(&mut self.pixels, amount);
    }

    pub fn set_pixel(&mut self, index: usize, color: Rgb, shift: u8) {
        set_pixel(&mut self.pixels, index, color, shift);
    }

    /// Pixels as they appear on the wire for `scope`
    pub fn scoped(&self, scope: OutputScope) -> [Rgb; PIXEL_COUNT] {
        match scope {
            OutputScope::Full => self.pixels,
            OutputScope::FirstHalfTwice => {
                let mut out = self.pixels;
                let (first, second) = out.split_at_mut(EYE_PIXELS);
                second.copy_from_slice(first);
                out
            }
        }
    }

    /// Serialize in WS2812 wire order (green, red, blue)
    pub fn to_grb_bytes(&self) -> [u8; PIXEL_COUNT * BYTES_PER_PIXEL] {
        let mut bytes = [0; PIXEL_COUNT * BYTES_PER_PIXEL];
        encode_grb(&self.pixels, &mut bytes);
        bytes
    }
}

impl Index<usize> for FrameBuffer {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pixels[index]
    }
}
