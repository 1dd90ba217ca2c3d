//! Scanner effect
//!
//! A dot sweeps left to right along the upper and lower edge of both eyes,
//! leaving a fading trail, then the strip rests while the trail dies out.

use embassy_time::Duration;

use super::{Effect, FrameStep, RepCursor};
use crate::{
    color::{Rgb, palette_color},
    frame::FrameBuffer,
    layout::{EyeLayout, SCANNER_LOWER, SCANNER_UPPER},
    lfsr::Lfsr,
};

const SCANNER_SHIFT: u8 = 4;
const SCANNER_DECAY: u8 = 1;
const SWEEP_STEPS: usize = SCANNER_UPPER.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Number of sweeps
    pub repetitions: u16,
    /// Frames of trail decay after each sweep
    pub pause_steps: usize,
    /// Delay after every sweep and pause step
    pub step_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct ScannerEffect {
    config: ScannerConfig,
    layout: EyeLayout,
    cursor: RepCursor,
    color: Rgb,
}

impl ScannerEffect {
    pub fn new(config: ScannerConfig, layout: EyeLayout) -> Self {
        Self {
            config,
            layout,
            cursor: RepCursor::new(),
            color: Rgb::default(),
        }
    }

    const fn steps_per_rep(&self) -> usize {
        SWEEP_STEPS + self.config.pause_steps
    }
}

impl Effect for ScannerEffect {
    fn render(&mut self, rng: &mut Lfsr, frame: &mut FrameBuffer) -> Option<FrameStep> {
        if self.cursor.is_done(self.config.repetitions) {
            return None;
        }

        let step = self.cursor.step();
        if step == 0 {
            self.color = palette_color(rng.next_byte());
        }

        frame.decay(SCANNER_DECAY);
        if step < SWEEP_STEPS {
            if self.layout.is_dual() {
                frame.set_pixel(SCANNER_LOWER[step], self.color, SCANNER_SHIFT);
            }
            frame.set_pixel(SCANNER_UPPER[step], self.color, SCANNER_SHIFT);
        }

        self.cursor.advance(self.steps_per_rep());
        Some(FrameStep::full(self.config.step_delay))
    }

    fn reset(&mut self) {
        self.cursor = RepCursor::new();
    }
}
