//! Rollercoaster effect
//!
//! A dot rides the figure eight through both eyes. Over one lap its color
//! walks linearly from the current palette pick to the next one, which then
//! becomes the starting color of the following lap.

use embassy_time::Duration;

use super::{Effect, FrameStep, RepCursor};
use crate::{
    color::{Rgb, palette_color},
    frame::FrameBuffer,
    layout::FIGURE_EIGHT,
    lfsr::Lfsr,
    math8::{add_delta, step_delta},
};

const COASTER_SHIFT: u8 = 4;
const COASTER_DECAY: u8 = 1;
const LAP_STEPS: usize = FIGURE_EIGHT.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollercoasterConfig {
    /// Number of laps
    pub repetitions: u16,
    /// Delay after every step
    pub step_delay: Duration,
}

/// Per-channel color delta applied after every step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ColorStep {
    r: i16,
    g: i16,
    b: i16,
}

impl ColorStep {
    const fn between(from: Rgb, to: Rgb) -> Self {
        Self {
            r: step_delta(from.r, to.r, LAP_STEPS),
            g: step_delta(from.g, to.g, LAP_STEPS),
            b: step_delta(from.b, to.b, LAP_STEPS),
        }
    }

    const fn apply(self, color: Rgb) -> Rgb {
        Rgb {
            r: add_delta(color.r, self.r),
            g: add_delta(color.g, self.g),
            b: add_delta(color.b, self.b),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RollercoasterEffect {
    config: RollercoasterConfig,
    cursor: RepCursor,
    /// Set once the starting color has been drawn
    started: bool,
    current: Rgb,
    next: Rgb,
    color_step: ColorStep,
}

impl RollercoasterEffect {
    pub fn new(config: RollercoasterConfig) -> Self {
        Self {
            config,
            cursor: RepCursor::new(),
            started: false,
            current: Rgb::default(),
            next: Rgb::default(),
            color_step: ColorStep::default(),
        }
    }
}

impl Effect for RollercoasterEffect {
    fn render(&mut self, rng: &mut Lfsr, frame: &mut FrameBuffer) -> Option<FrameStep> {
        if self.cursor.is_done(self.config.repetitions) {
            return None;
        }

        if !self.started {
            self.current = palette_color(rng.next_byte());
            self.started = true;
        }

        let step = self.cursor.step();
        if step == 0 {
            self.next = palette_color(rng.next_byte());
            self.color_step = ColorStep::between(self.current, self.next);
        }

        frame.decay(COASTER_DECAY);
        frame.set_pixel(FIGURE_EIGHT[step], self.current, COASTER_SHIFT);
        self.current = self.color_step.apply(self.current);

        if self.cursor.advance(LAP_STEPS) {
            // Truncated steps may stop short, snap to the target
            self.current = self.next;
        }
        Some(FrameStep::full(self.config.step_delay))
    }

    fn reset(&mut self) {
        self.cursor = RepCursor::new();
        self.started = false;
    }
}
