//! Circles effect
//!
//! A dot runs around the first eye. On dual hardware a second dot runs around
//! the other eye half a turn ahead.

use embassy_time::Duration;

use super::{Effect, FrameStep, RepCursor};
use crate::{
    color::{Rgb, palette_color},
    frame::FrameBuffer,
    layout::{EYE_PIXELS, EyeLayout, opposite_eye_index},
    lfsr::Lfsr,
};

const CIRCLE_SHIFT: u8 = 4;
const CIRCLE_DECAY: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CirclesConfig {
    /// Number of laps
    pub repetitions: u16,
    /// Delay after every step
    pub step_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct CirclesEffect {
    config: CirclesConfig,
    layout: EyeLayout,
    cursor: RepCursor,
    color: Rgb,
}

impl CirclesEffect {
    pub fn new(config: CirclesConfig, layout: EyeLayout) -> Self {
        Self {
            config,
            layout,
            cursor: RepCursor::new(),
            color: Rgb::default(),
        }
    }
}

impl Effect for CirclesEffect {
    fn render(&mut self, rng: &mut Lfsr, frame: &mut FrameBuffer) -> Option<FrameStep> {
        if self.cursor.is_done(self.config.repetitions) {
            return None;
        }

        let step = self.cursor.step();
        if step == 0 {
            self.color = palette_color(rng.next_byte());
        }

        frame.decay(CIRCLE_DECAY);
        frame.set_pixel(step, self.color, CIRCLE_SHIFT);
        if self.layout.is_dual() {
            frame.set_pixel(opposite_eye_index(step), self.color, CIRCLE_SHIFT);
        }

        self.cursor.advance(EYE_PIXELS);
        Some(FrameStep::full(self.config.step_delay))
    }

    fn reset(&mut self) {
        self.cursor = RepCursor::new();
    }
}
