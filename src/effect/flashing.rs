//! Flashing effect
//!
//! The whole buffer fades in and back out in one random palette color per
//! repetition.

use embassy_time::Duration;

use super::{Effect, FrameStep, RepCursor};
use crate::{
    color::{Rgb, palette_color, scale_color},
    easing::{EASING_STEPS, ease_in, ease_out},
    frame::{FrameBuffer, OutputScope},
    layout::EyeLayout,
    lfsr::Lfsr,
};

const FLASH_SHIFT: u8 = 3;
const STEPS_PER_FLASH: usize = EASING_STEPS * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashingConfig {
    /// Number of flashes
    pub repetitions: u16,
    /// Delay after every ramp step
    pub step_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct FlashingEffect {
    config: FlashingConfig,
    scope: OutputScope,
    cursor: RepCursor,
    color: Rgb,
}

impl FlashingEffect {
    pub fn new(config: FlashingConfig, layout: EyeLayout) -> Self {
        // Both segments show the first eye's data on dual hardware
        let scope = if layout.is_dual() {
            OutputScope::FirstHalfTwice
        } else {
            OutputScope::Full
        };
        Self {
            config,
            scope,
            cursor: RepCursor::new(),
            color: Rgb::default(),
        }
    }
}

impl Effect for FlashingEffect {
    fn render(&mut self, rng: &mut Lfsr, frame: &mut FrameBuffer) -> Option<FrameStep> {
        if self.cursor.is_done(self.config.repetitions) {
            return None;
        }

        let step = self.cursor.step();
        if step == 0 {
            self.color = palette_color(rng.next_byte());
        }

        let brightness = if step < EASING_STEPS {
            ease_in(step)
        } else {
            ease_out(step - EASING_STEPS)
        };
        frame.fill(scale_color(self.color, brightness), FLASH_SHIFT);

        self.cursor.advance(STEPS_PER_FLASH);
        Some(FrameStep {
            delay: self.config.step_delay,
            scope: self.scope,
        })
    }

    fn reset(&mut self) {
        self.cursor = RepCursor::new();
    }
}
