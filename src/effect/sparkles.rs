//! Sparkles effect
//!
//! Walks the palette in order. For every color, random pairs of pixels light
//! up in a slightly randomized shade of it and quickly fade.

use embassy_time::Duration;

use super::{Effect, FrameStep, RepCursor};
use crate::{
    color::{PALETTE, Rgb, offset_dim},
    frame::FrameBuffer,
    layout::PIXEL_COUNT,
    lfsr::Lfsr,
};

const SPARKLE_SHIFT: u8 = 3;
const SPARKLE_DECAY: u8 = 8;
/// Random offsets are reduced to `0..64`
const OFFSET_SHIFT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparklesConfig {
    /// Sparkle frames per palette color
    pub repetitions: u16,
    /// Delay after every frame
    pub step_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct SparklesEffect {
    config: SparklesConfig,
    /// `rep` walks the palette, `step` counts sparkles within a color
    cursor: RepCursor,
}

impl SparklesEffect {
    pub fn new(config: SparklesConfig) -> Self {
        Self {
            config,
            cursor: RepCursor::new(),
        }
    }

    fn random_offset(rng: &mut Lfsr) -> u8 {
        rng.next_byte() >> OFFSET_SHIFT
    }
}

impl Effect for SparklesEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, rng: &mut Lfsr, frame: &mut FrameBuffer) -> Option<FrameStep> {
        if self.config.repetitions == 0 || self.cursor.is_done(PALETTE.len() as u16) {
            return None;
        }
        let base = PALETTE[usize::from(self.cursor.rep())];

        frame.decay(SPARKLE_DECAY);

        let first = rng.next_index(PIXEL_COUNT);
        let second = rng.next_index(PIXEL_COUNT);
        let offset = Rgb {
            r: Self::random_offset(rng),
            g: Self::random_offset(rng),
            b: Self::random_offset(rng),
        };
        let sparkle = offset_dim(base, offset, SPARKLE_SHIFT);
        frame.set_pixel(first, sparkle, 0);
        frame.set_pixel(second, sparkle, 0);

        self.cursor.advance(usize::from(self.config.repetitions));
        Some(FrameStep::full(self.config.step_delay))
    }

    fn reset(&mut self) {
        self.cursor = RepCursor::new();
    }
}
