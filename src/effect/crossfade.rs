//! Flashing back and forth
//!
//! Each repetition fades a new color into the first eye while the previous
//! color fades out of the second, then hands the new color over to the second
//! eye while the first goes dark.

use embassy_time::Duration;

use super::{Effect, FrameStep, RepCursor};
use crate::{
    color::{Rgb, palette_color, scale_color},
    easing::{EASING_STEPS, ease_in, ease_out},
    frame::{FrameBuffer, fill},
    lfsr::Lfsr,
};

const CROSSFADE_SHIFT: u8 = 3;
const STEPS_PER_SWING: usize = EASING_STEPS * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossfadeConfig {
    /// Number of back and forth swings
    pub repetitions: u16,
    /// Step delay while the new color fades into the first eye
    pub fade_in_delay: Duration,
    /// Step delay while the color moves over to the second eye
    pub hand_over_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct CrossfadeEffect {
    config: CrossfadeConfig,
    cursor: RepCursor,
    color: Rgb,
    last: Rgb,
}

impl CrossfadeEffect {
    pub fn new(config: CrossfadeConfig) -> Self {
        Self {
            config,
            cursor: RepCursor::new(),
            color: Rgb::default(),
            last: Rgb::default(),
        }
    }
}

impl Effect for CrossfadeEffect {
    fn render(&mut self, rng: &mut Lfsr, frame: &mut FrameBuffer) -> Option<FrameStep> {
        if self.cursor.is_done(self.config.repetitions) {
            return None;
        }

        let step = self.cursor.step();
        if step == 0 {
            self.color = palette_color(rng.next_byte());
        }

        let (first_eye, second_eye) = frame.eyes_mut();
        let delay = if step < EASING_STEPS {
            fill(first_eye, scale_color(self.color, ease_in(step)), CROSSFADE_SHIFT);
            fill(second_eye, scale_color(self.last, ease_out(step)), CROSSFADE_SHIFT);
            self.config.fade_in_delay
        } else {
            if step == EASING_STEPS {
                self.last = self.color;
            }
            let i = step - EASING_STEPS;
            fill(first_eye, scale_color(self.color, ease_out(i)), CROSSFADE_SHIFT);
            fill(second_eye, scale_color(self.last, ease_in(i)), CROSSFADE_SHIFT);
            self.config.hand_over_delay
        };

        self.cursor.advance(STEPS_PER_SWING);
        Some(FrameStep::full(delay))
    }

    fn reset(&mut self) {
        self.cursor = RepCursor::new();
        self.last = Rgb::default();
    }
}
